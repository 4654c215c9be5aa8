//! PDF voucher renderer
//!
//! Single-record confirmation document with a fixed A4 layout: optional logo,
//! title, guest section, reservation section, value, closing message. A
//! missing or unreadable logo is skipped silently; every other failure is a
//! render error.

use std::path::Path;

use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};

use super::{or_na, sim_nao};
use crate::db::models::Reserva;
use crate::utils::date;
use crate::utils::{AppError, AppResult};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 18.0;

const TITLE_SIZE: f32 = 24.0;
const SECTION_SIZE: f32 = 16.0;
const FIELD_SIZE: f32 = 12.0;

/// Render the voucher for a single reservation.
pub fn render(reserva: &Reserva, logo: Option<&Path>) -> AppResult<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new("Voucher da Reserva", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "voucher");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(to_render)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(to_render)?;
    let layer = doc.get_page(page).get_layer(layer);

    if let Some(path) = logo {
        embed_logo(&layer, path);
    }

    let mut cursor = Cursor::new(PAGE_HEIGHT - 45.0);

    layer.use_text("Voucher da Reserva", TITLE_SIZE, Mm(62.0), Mm(cursor.y), &bold);
    cursor.advance(10.0);
    rule(&layer, cursor.y);
    cursor.advance(14.0);

    section(&layer, &mut cursor, &bold, "Dados do Hóspede");
    field(&layer, &mut cursor, &regular, "Nome", &reserva.nome_hospede);
    field(&layer, &mut cursor, &regular, "Telefone", &reserva.telefone);
    field(&layer, &mut cursor, &regular, "CPF", or_na(reserva.cpf.as_deref()));
    field(&layer, &mut cursor, &regular, "Email", or_na(reserva.email.as_deref()));
    let endereco = format!(
        "{}, {}, {}, {} - CEP: {}",
        or_na(reserva.endereco.as_deref()),
        or_na(reserva.bairro.as_deref()),
        or_na(reserva.cidade.as_deref()),
        or_na(reserva.uf.as_deref()),
        or_na(reserva.cep.as_deref()),
    );
    field(&layer, &mut cursor, &regular, "Endereço", &endereco);
    cursor.advance(8.0);

    section(&layer, &mut cursor, &bold, "Dados da Reserva");
    field(&layer, &mut cursor, &regular, "Número do Quarto", &reserva.numero_quarto);
    field(
        &layer,
        &mut cursor,
        &regular,
        "Data de Check-in",
        &date::format(reserva.data_checkin),
    );
    field(
        &layer,
        &mut cursor,
        &regular,
        "Data de Check-out",
        &date::format(reserva.data_checkout),
    );
    field(
        &layer,
        &mut cursor,
        &regular,
        "Café da Manhã",
        sim_nao(reserva.cafe_da_manha),
    );
    field(
        &layer,
        &mut cursor,
        &regular,
        "Estacionamento",
        sim_nao(reserva.estacionamento.incluido()),
    );
    if reserva.estacionamento.incluido() {
        let entrada = reserva.estacionamento.entrada().map(date::format);
        let saida = reserva.estacionamento.saida().map(date::format);
        field(
            &layer,
            &mut cursor,
            &regular,
            "Entrada do Estacionamento",
            or_na(entrada.as_deref()),
        );
        field(
            &layer,
            &mut cursor,
            &regular,
            "Saída do Estacionamento",
            or_na(saida.as_deref()),
        );
    }
    field(
        &layer,
        &mut cursor,
        &regular,
        "Valor da Reserva",
        &reserva.valor_reserva.to_string(),
    );
    cursor.advance(6.0);

    rule(&layer, cursor.y);
    cursor.advance(14.0);
    layer.use_text(
        "Obrigado por escolher nossa pousada. Desejamos uma excelente estadia!",
        FIELD_SIZE,
        Mm(30.0),
        Mm(cursor.y),
        &regular,
    );

    doc.save_to_bytes().map_err(to_render)
}

/// Vertical write position, top-down on a bottom-left origin page.
struct Cursor {
    y: f32,
}

impl Cursor {
    fn new(y: f32) -> Self {
        Self { y }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }
}

fn section(
    layer: &PdfLayerReference,
    cursor: &mut Cursor,
    font: &IndirectFontRef,
    title: &str,
) {
    layer.use_text(title, SECTION_SIZE, Mm(MARGIN), Mm(cursor.y), font);
    cursor.advance(9.0);
}

fn field(
    layer: &PdfLayerReference,
    cursor: &mut Cursor,
    font: &IndirectFontRef,
    label: &str,
    value: &str,
) {
    layer.use_text(
        format!("{label}: {value}"),
        FIELD_SIZE,
        Mm(MARGIN),
        Mm(cursor.y),
        font,
    );
    cursor.advance(7.0);
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.2, 0.2, 0.2, None)));
    layer.set_outline_thickness(0.6);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Missing or unreadable logo is a soft skip, never an error.
fn embed_logo(layer: &PdfLayerReference, path: &Path) {
    use printpdf::image_crate::codecs::jpeg::JpegDecoder;

    if !path.exists() {
        return;
    }
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!("Voucher logo skipped: {e}");
            return;
        }
    };
    let decoder = match JpegDecoder::new(std::io::BufReader::new(file)) {
        Ok(d) => d,
        Err(e) => {
            tracing::debug!("Voucher logo skipped: {e}");
            return;
        }
    };
    let image = match Image::try_from(decoder) {
        Ok(i) => i,
        Err(e) => {
            tracing::debug!("Voucher logo skipped: {e}");
            return;
        }
    };
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(Mm(PAGE_HEIGHT - 35.0)),
            dpi: Some(300.0),
            ..Default::default()
        },
    );
}

fn to_render(e: impl std::fmt::Display) -> AppError {
    AppError::render(format!("pdf: {e}"))
}
