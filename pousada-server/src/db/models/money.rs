//! Monetary values using rust_decimal for precision
//!
//! The reservation value carries an explicit currency unit instead of the
//! free-text amount the legacy schema stored, so totals and reporting can be
//! added without reparsing strings. The wire representation stays a bare
//! amount (`"350.00"`), accepted as a JSON string or number; strings may use
//! a `R$` prefix and Brazilian comma decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::utils::{AppError, AppResult};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Brl,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
        }
    }
}

/// A decimal amount in a concrete currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn brl(amount: Decimal) -> Self {
        Self {
            amount: round(amount),
            currency: Currency::Brl,
        }
    }

    /// Parse a wire amount: `"350"`, `"350.00"`, `"R$ 350,00"`, `"1.234,56"`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut s = raw.trim();
        if let Some(rest) = s.strip_prefix("R$").or_else(|| s.strip_prefix("r$")) {
            s = rest.trim_start();
        }
        if s.is_empty() {
            return Err(AppError::validation("valorReserva must not be empty"));
        }

        // Comma marks the decimal separator in the Brazilian form; any dots
        // before it are thousands separators.
        let normalized = if s.contains(',') {
            s.replace('.', "").replace(',', ".")
        } else {
            s.to_string()
        };

        let amount: Decimal = normalized
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid reservation value: {raw}")))?;
        if amount.is_sign_negative() {
            return Err(AppError::validation("valorReserva must be non-negative"));
        }
        Ok(Self::brl(amount))
    }
}

fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency.symbol(), self.amount)
    }
}

impl serde::Serialize for Money {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_str(&format!("{:.2}", self.amount))
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal amount as string or number")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Money::parse(value).map_err(de::Error::custom)
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::try_from(value)
                    .map(Money::brl)
                    .map_err(|_| de::Error::custom(format!("invalid amount: {value}")))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Money::brl(Decimal::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Money::brl(Decimal::from(value)))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}
