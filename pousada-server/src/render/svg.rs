//! SVG summary export
//!
//! Fixed 800×600 canvas, one six-line text block per record at a fixed
//! vertical stride. Records past the nominal canvas height simply extend
//! below it; no pagination or overflow handling.

use super::sim_nao;
use crate::db::models::Reserva;
use crate::utils::date;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const TITLE_SIZE: u32 = 20;
const TEXT_SIZE: u32 = 14;
const LINE_STEP: u32 = 20;
const BLOCK_STEP: u32 = 120;

/// Render the record set; zero records still yield a valid title-only document.
pub fn document(reservas: &[Reserva]) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\">"
    );
    text(&mut svg, 20, TITLE_SIZE, "Reservas:");

    let mut y = 50;
    for reserva in reservas {
        let lines = [
            format!("Nome: {}", reserva.nome_hospede),
            format!("Telefone: {}", reserva.telefone),
            format!("Quarto: {}", reserva.numero_quarto),
            format!("Check-in: {}", date::format(reserva.data_checkin)),
            format!("Check-out: {}", date::format(reserva.data_checkout)),
            format!("Café da manhã: {}", sim_nao(reserva.cafe_da_manha)),
        ];
        for (i, line) in lines.iter().enumerate() {
            text(&mut svg, y + i as u32 * LINE_STEP, TEXT_SIZE, line);
        }
        y += BLOCK_STEP;
    }

    svg.push_str("</svg>");
    svg
}

fn text(out: &mut String, y: u32, size: u32, content: &str) {
    out.push_str(&format!(
        "<text x=\"10\" y=\"{y}\" font-family=\"Arial\" font-size=\"{size}\">{}</text>",
        escape(content)
    ));
}

/// XML text escaping
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Estacionamento, Money};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn reserva(nome: &str) -> Reserva {
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
            numero_quarto: "12".into(),
            data_checkin: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            data_checkout: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
            cafe_da_manha: false,
            estacionamento: Estacionamento::Sem,
            valor_reserva: Money::brl(Decimal::new(35000, 2)),
        }
    }

    #[test]
    fn empty_record_set_is_still_a_valid_document() {
        let svg = document(&[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Reservas:"));
        assert!(svg.contains("width=\"800\" height=\"600\""));
    }

    #[test]
    fn renders_six_lines_per_record() {
        let svg = document(&[reserva("Ana"), reserva("Pedro")]);
        // title + 6 lines per record
        assert_eq!(svg.matches("<text").count(), 1 + 2 * 6);
        assert!(svg.contains("Check-in: 10/02/2024"));
        assert!(svg.contains("Café da manhã: Não"));
    }

    #[test]
    fn blocks_advance_at_a_fixed_stride() {
        let svg = document(&[reserva("Ana"), reserva("Pedro")]);
        assert!(svg.contains("y=\"50\""));
        assert!(svg.contains("y=\"170\""));
    }

    #[test]
    fn escapes_markup_in_field_values() {
        let svg = document(&[reserva("<svg>&")]);
        assert!(svg.contains("Nome: &lt;svg&gt;&amp;"));
    }
}
