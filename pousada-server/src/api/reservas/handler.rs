//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Reserva, ReservaCreate};
use crate::db::repository::ReservaRepository;
use crate::query::ReservaFilter;
use crate::render;
use crate::utils::{AppError, AppResult};

/// Optional list filters, straight from the query string
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub nome: Option<String>,
    pub mes: Option<String>,
}

/// POST /api/reservas - create a reservation
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservaCreate>,
) -> AppResult<(StatusCode, Json<Reserva>)> {
    payload.validate()?;

    let repo = ReservaRepository::new(state.db.clone());
    let reserva = repo.create(payload).await?;

    let id = reserva
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();
    tracing::info!(id = %id, guest = %reserva.nome_hospede, "Reservation created");

    Ok((StatusCode::CREATED, Json(reserva)))
}

/// GET /api/reservas?nome=&mes= - list with optional filters
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Reserva>>> {
    let filter = ReservaFilter::new(query.nome, query.mes)?;
    let repo = ReservaRepository::new(state.db.clone());
    let reservas = repo.find_filtered(&filter).await?;
    Ok(Json(reservas))
}

/// GET /api/reservas/rows?nome=&mes= - the table-row projection the UI consumes
pub async fn rows(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Html<String>> {
    let filter = ReservaFilter::new(query.nome, query.mes)?;
    let repo = ReservaRepository::new(state.db.clone());
    let reservas = repo.find_filtered(&filter).await?;
    Ok(Html(render::table::rows(&reservas)))
}

/// GET /api/reservas/:id - fetch a single reservation
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reserva>> {
    let repo = ReservaRepository::new(state.db.clone());
    let reserva = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Reserva não encontrada"))?;
    Ok(Json(reserva))
}

/// DELETE /api/reservas/:id - delete a reservation (terminal, no undo)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let repo = ReservaRepository::new(state.db.clone());
    let removed = repo.delete(&id).await?;
    if !removed {
        return Err(AppError::not_found("Reserva não encontrada"));
    }
    tracing::info!(id = %id, "Reservation deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/reservas/:id/pdf - download the voucher
pub async fn voucher_pdf(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let repo = ReservaRepository::new(state.db.clone());
    let reserva = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Reserva não encontrada"))?;

    let logo = state.voucher_logo_path();
    let bytes = render::voucher::render(&reserva, Some(logo.as_path()))?;

    let key = reserva
        .id
        .as_ref()
        .map(|id| id.key().to_string())
        .unwrap_or_default();
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=voucher-{key}.pdf"),
        ),
    ];
    Ok((headers, bytes).into_response())
}
