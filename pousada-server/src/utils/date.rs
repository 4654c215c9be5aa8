//! Canonical calendar-date handling
//!
//! Reservation dates are kept as [`NaiveDate`] internally and rendered as
//! `dd/mm/yyyy` at every boundary (store and API alike), so display never
//! depends on render-time timezone conversion. Input is accepted in three
//! wire shapes:
//!
//! - dash-delimited `yyyy-mm-dd` (first segment is the year)
//! - slash-delimited `dd/mm/yyyy` (already in display order)
//! - digits-only epoch milliseconds (calendar date taken in UTC)

use chrono::{DateTime, Datelike, NaiveDate};

use super::{AppError, AppResult};

/// Parse a raw date-like input into a calendar date.
///
/// Empty/blank input is "no date" (`Ok(None)`), not an error, so optional
/// fields like the parking dates can be legitimately absent.
pub fn parse(raw: &str) -> AppResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if raw.contains('-') {
        return NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| invalid(raw));
    }
    if raw.contains('/') {
        return NaiveDate::parse_from_str(raw, "%d/%m/%Y")
            .map(Some)
            .map_err(|_| invalid(raw));
    }
    if let Ok(millis) = raw.parse::<i64>() {
        return from_epoch_millis(millis).map(Some).ok_or_else(|| invalid(raw));
    }

    Err(invalid(raw))
}

/// Render the canonical `dd/mm/yyyy` form.
///
/// Total for any date [`parse`] can produce; `parse(format(d)) == Some(d)`.
pub fn format(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Calendar date of an epoch-millisecond instant, in UTC.
pub fn from_epoch_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

fn invalid(raw: &str) -> AppError {
    AppError::validation(format!("Invalid date format: {raw}"))
}

/// Accepts the string wire shapes plus an epoch-millisecond instant.
struct FlexibleDate(Option<NaiveDate>);

impl<'de> serde::Deserialize<'de> for FlexibleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a date string or epoch milliseconds")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse(value).map(FlexibleDate).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                from_epoch_millis(value)
                    .map(|d| FlexibleDate(Some(d)))
                    .ok_or_else(|| de::Error::custom(format!("invalid epoch instant: {value}")))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_i64(value as i64)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleDate(None))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleDate(None))
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Serde projection of a required date as the canonical `dd/mm/yyyy` string.
pub mod as_ddmmyyyy {
    use super::*;
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format(*date))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::Deserialize;
        FlexibleDate::deserialize(d)?
            .0
            .ok_or_else(|| de::Error::custom("date must not be empty"))
    }
}

/// Serde projection of an optional date as the canonical `dd/mm/yyyy` string.
pub mod option_as_ddmmyyyy {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => s.serialize_some(&format(*date)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::Deserialize;
        Ok(Option::<FlexibleDate>::deserialize(d)?.and_then(|f| f.0))
    }
}
