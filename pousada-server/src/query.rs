//! Filter-to-query translation
//!
//! List filters (`nome` substring, `mes` month) become a [`ReservaFilter`]:
//! a pure predicate over a [`Reserva`], independent of the store's native
//! filter representation so it is testable without a store. The repository
//! additionally pushes the name half down into its SurrealQL `WHERE` clause.

use chrono::NaiveDate;

use crate::db::models::Reserva;
use crate::utils::{AppError, AppResult};

/// A calendar month, parsed from the `yyyy-mm` query form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let invalid = || AppError::validation(format!("Invalid month filter: {raw}"));
        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// First day of the following month; December rolls over into January.
    pub fn first_of_next(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    /// Half-open interval: inclusive of the 1st, exclusive of the next 1st.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date < self.first_of_next()
    }
}

/// Optional list filters; an empty filter matches every record.
#[derive(Debug, Clone)]
pub struct ReservaFilter {
    pub nome: Option<String>,
    pub mes: Option<YearMonth>,
}

impl ReservaFilter {
    /// Build from raw query parameters; blank values count as absent.
    pub fn new(nome: Option<String>, mes: Option<String>) -> AppResult<Self> {
        let nome = nome
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let mes = match mes.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()) {
            Some(m) => Some(YearMonth::parse(&m)?),
            None => None,
        };
        Ok(Self { nome, mes })
    }

    pub fn is_empty(&self) -> bool {
        self.nome.is_none() && self.mes.is_none()
    }

    /// Pure predicate: case-insensitive unanchored name substring AND
    /// check-in within the month. Both halves default to true when absent.
    pub fn matches(&self, reserva: &Reserva) -> bool {
        let nome_ok = self.nome.as_ref().is_none_or(|nome| {
            reserva
                .nome_hospede
                .to_lowercase()
                .contains(&nome.to_lowercase())
        });
        let mes_ok = self
            .mes
            .is_none_or(|mes| mes.contains(reserva.data_checkin));
        nome_ok && mes_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Estacionamento, Money, Reserva};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reserva(nome: &str, checkin: NaiveDate) -> Reserva {
        Reserva {
            id: None,
            nome_hospede: nome.into(),
            telefone: "11 99999-0000".into(),
            cpf: None,
            email: None,
            cep: None,
            cidade: None,
            bairro: None,
            endereco: None,
            uf: None,
            numero_quarto: "1".into(),
            data_checkin: checkin,
            data_checkout: checkin,
            cafe_da_manha: false,
            estacionamento: Estacionamento::Sem,
            valor_reserva: Money::brl(Decimal::new(10000, 2)),
        }
    }

    #[test]
    fn empty_filter_matches_every_record() {
        let filter = ReservaFilter::new(None, None).unwrap();
        assert!(filter.is_empty());
        for nome in ["Ana Silva", "MARIANA", "Pedro"] {
            assert!(filter.matches(&reserva(nome, date(2024, 2, 10))));
        }
    }

    #[test]
    fn name_filter_is_a_case_insensitive_substring() {
        let filter = ReservaFilter::new(Some("ana".into()), None).unwrap();
        assert!(filter.matches(&reserva("Ana Silva", date(2024, 2, 10))));
        assert!(filter.matches(&reserva("MARIANA", date(2024, 2, 10))));
        assert!(!filter.matches(&reserva("Pedro", date(2024, 2, 10))));
    }

    #[test]
    fn month_filter_is_a_half_open_interval() {
        let filter = ReservaFilter::new(None, Some("2024-02".into())).unwrap();
        assert!(filter.matches(&reserva("Ana", date(2024, 2, 1))));
        assert!(filter.matches(&reserva("Ana", date(2024, 2, 29))));
        assert!(!filter.matches(&reserva("Ana", date(2024, 1, 31))));
        assert!(!filter.matches(&reserva("Ana", date(2024, 3, 1))));
    }

    #[test]
    fn december_rolls_over_to_january() {
        let mes = YearMonth::parse("2024-12").unwrap();
        assert_eq!(mes.first_of_next(), date(2025, 1, 1));
        assert!(mes.contains(date(2024, 12, 31)));
        assert!(!mes.contains(date(2025, 1, 1)));
    }

    #[test]
    fn both_filters_conjoin() {
        let filter =
            ReservaFilter::new(Some("ana".into()), Some("2024-02".into())).unwrap();
        assert!(filter.matches(&reserva("Ana Silva", date(2024, 2, 10))));
        assert!(!filter.matches(&reserva("Ana Silva", date(2024, 3, 10))));
        assert!(!filter.matches(&reserva("Pedro", date(2024, 2, 10))));
    }

    #[test]
    fn blank_parameters_count_as_absent() {
        let filter = ReservaFilter::new(Some("  ".into()), Some("".into())).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn malformed_month_is_rejected() {
        assert!(YearMonth::parse("2024").is_err());
        assert!(YearMonth::parse("2024-13").is_err());
        assert!(YearMonth::parse("abcd-ef").is_err());
        assert!(ReservaFilter::new(None, Some("2024/02".into())).is_err());
    }
}
