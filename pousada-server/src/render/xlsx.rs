//! Workbook export
//!
//! One header row plus one data row per record. Cells carry the exact
//! display strings the UI shows (formatted dates, Sim/Não), not underlying
//! dates or booleans.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::sim_nao;
use crate::db::models::Reserva;
use crate::utils::date;
use crate::utils::{AppError, AppResult};

const SHEET_NAME: &str = "Reservas";
const COLUMN_WIDTH: f64 = 20.0;

const HEADERS: [&str; 6] = [
    "Nome do Hóspede",
    "Telefone",
    "Número do Quarto",
    "Data de Check-in",
    "Data de Check-out",
    "Café da Manhã",
];

/// Render the record set; zero records yield a header-only workbook.
pub fn workbook(reservas: &[Reserva]) -> AppResult<Vec<u8>> {
    build(reservas).map_err(|e| AppError::render(format!("xlsx: {e}")))
}

fn build(reservas: &[Reserva]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, header) in HEADERS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *header, &bold)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (i, reserva) in reservas.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &reserva.nome_hospede)?;
        sheet.write_string(row, 1, &reserva.telefone)?;
        sheet.write_string(row, 2, &reserva.numero_quarto)?;
        sheet.write_string(row, 3, date::format(reserva.data_checkin))?;
        sheet.write_string(row, 4, date::format(reserva.data_checkout))?;
        sheet.write_string(row, 5, sim_nao(reserva.cafe_da_manha))?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Estacionamento, Money};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn reserva() -> Reserva {
        Reserva {
            id: None,
            nome_hospede: "Ana Silva".into(),
            telefone: "11 99999-0000".into(),
            cpf: None,
            email: None,
            cep: None,
            cidade: None,
            bairro: None,
            endereco: None,
            uf: None,
            numero_quarto: "12".into(),
            data_checkin: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            data_checkout: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
            cafe_da_manha: true,
            estacionamento: Estacionamento::Sem,
            valor_reserva: Money::brl(Decimal::new(35000, 2)),
        }
    }

    #[test]
    fn workbook_bytes_carry_the_zip_magic() {
        let bytes = workbook(&[reserva()]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn empty_record_set_still_produces_a_workbook() {
        let bytes = workbook(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
