//! Export API Handlers
//!
//! Whole-collection exports; list filters are deliberately ignored here.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::db::repository::ReservaRepository;
use crate::render;
use crate::utils::AppResult;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /api/export/svg - all reservations as an SVG summary
pub async fn svg(State(state): State<ServerState>) -> AppResult<Response> {
    let repo = ReservaRepository::new(state.db.clone());
    let reservas = repo.find_all().await?;
    let document = render::svg::document(&reservas);

    let headers = [
        (header::CONTENT_TYPE, "image/svg+xml".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=reservas.svg".to_string(),
        ),
    ];
    Ok((headers, document).into_response())
}

/// GET /api/export/excel - all reservations as a workbook
pub async fn excel(State(state): State<ServerState>) -> AppResult<Response> {
    let repo = ReservaRepository::new(state.db.clone());
    let reservas = repo.find_all().await?;
    let bytes = render::xlsx::workbook(&reservas)?;

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=reservas.xlsx".to_string(),
        ),
    ];
    Ok((headers, bytes).into_response())
}
