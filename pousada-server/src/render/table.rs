//! HTML table-row projection for the UI
//!
//! One `<tr>` per record, in store return order. The fragment is meant to be
//! injected into the UI's `<tbody>`; the action button is keyed by record id.

use super::sim_nao;
use crate::db::models::Reserva;
use crate::utils::date;

/// Render the table rows; an empty record set yields an empty fragment.
pub fn rows(reservas: &[Reserva]) -> String {
    let mut html = String::new();
    for reserva in reservas {
        let id = reserva
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default();
        html.push_str("<tr>");
        cell(&mut html, &reserva.nome_hospede);
        cell(&mut html, &reserva.telefone);
        cell(&mut html, &reserva.numero_quarto);
        cell(&mut html, &date::format(reserva.data_checkin));
        cell(&mut html, &date::format(reserva.data_checkout));
        cell(&mut html, sim_nao(reserva.cafe_da_manha));
        cell(&mut html, sim_nao(reserva.estacionamento.incluido()));
        cell(&mut html, &reserva.valor_reserva.to_string());
        html.push_str(&format!(
            "<td><button onclick=\"downloadPDF('{}')\">PDF</button></td>",
            escape(&id)
        ));
        html.push_str("</tr>\n");
    }
    html
}

fn cell(out: &mut String, value: &str) {
    out.push_str("<td>");
    out.push_str(&escape(value));
    out.push_str("</td>");
}

/// Minimal HTML escaping for text content and attribute values
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
