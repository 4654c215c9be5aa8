//! End-to-end API tests against an in-memory SurrealDB

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

use pousada_server::{Config, ServerState, router};

async fn test_app() -> Router {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let config = Config::with_overrides("/tmp/pousada-test", 0);
    router(ServerState::new(config, db))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

fn ana_payload() -> serde_json::Value {
    serde_json::json!({
        "nome_hospede": "Ana Silva",
        "telefone": "11 99999-0000",
        "numero_quarto": "12",
        "data_checkin": "2024-02-10",
        "data_checkout": "2024-02-12",
        "cafe_da_manha": true,
        "valorReserva": "350,00"
    })
}

#[tokio::test]
async fn create_then_filter_by_month() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/reservas", ana_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["nome_hospede"], "Ana Silva");
    assert_eq!(created["data_checkin"], "10/02/2024");
    assert_eq!(created["valorReserva"], "350.00");
    assert!(created["id"].as_str().unwrap().starts_with("reserva:"));

    let response = app
        .clone()
        .oneshot(get("/api/reservas?mes=2024-02"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let hits = body_json(response).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["nome_hospede"], "Ana Silva");

    let response = app
        .clone()
        .oneshot(get("/api/reservas?mes=2024-03"))
        .await
        .unwrap();
    let misses = body_json(response).await;
    assert_eq!(misses.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let app = test_app().await;

    for nome in ["Ana Silva", "MARIANA", "Pedro"] {
        let mut payload = ana_payload();
        payload["nome_hospede"] = serde_json::json!(nome);
        let response = app
            .clone()
            .oneshot(post_json("/api/reservas", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(get("/api/reservas?nome=ana"))
        .await
        .unwrap();
    let hits = body_json(response).await;
    let names: Vec<&str> = hits
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["nome_hospede"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Ana Silva"));
    assert!(names.contains(&"MARIANA"));
}

#[tokio::test]
async fn malformed_month_filter_is_a_400() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/reservas?mes=fevereiro"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let app = test_app().await;
    let mut payload = ana_payload();
    payload["data_checkin"] = serde_json::json!("2024-02-15");
    let response = app
        .oneshot(post_json("/api/reservas", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn parking_dates_without_parking_never_surface() {
    let app = test_app().await;
    let mut payload = ana_payload();
    payload["estacionamento"] = serde_json::json!(false);
    payload["entradaCar"] = serde_json::json!("2024-02-10");
    payload["saidaCar"] = serde_json::json!("2024-02-12");

    let response = app
        .clone()
        .oneshot(post_json("/api/reservas", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["estacionamento"], false);
    assert!(created.get("entradaCar").is_none());
    assert!(created.get("saidaCar").is_none());

    let id = created["id"].as_str().unwrap().to_string();
    let fetched = body_json(
        app.clone()
            .oneshot(get(&format!("/api/reservas/{id}")))
            .await
            .unwrap(),
    )
    .await;
    assert!(fetched.get("entradaCar").is_none());
    assert!(fetched.get("saidaCar").is_none());
}

#[tokio::test]
async fn voucher_pdf_starts_with_the_pdf_magic() {
    let app = test_app().await;
    let created = body_json(
        app.clone()
            .oneshot(post_json("/api/reservas", ana_payload()))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/reservas/{id}/pdf")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..4], b"%PDF");
}

#[tokio::test]
async fn voucher_for_unknown_id_is_a_404() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/api/reservas/reserva:nope/pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_fetch_is_a_404() {
    let app = test_app().await;
    let created = body_json(
        app.clone()
            .oneshot(post_json("/api/reservas", ana_payload()))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/reservas/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/reservas/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/reservas/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn exports_cover_the_whole_collection() {
    let app = test_app().await;
    app.clone()
        .oneshot(post_json("/api/reservas", ana_payload()))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/api/export/svg")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let svg = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Nome: Ana Silva"));

    let response = app.clone().oneshot(get("/api/export/excel")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn table_rows_render_the_ui_projection() {
    let app = test_app().await;
    app.clone()
        .oneshot(post_json("/api/reservas", ana_payload()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/api/reservas/rows?mes=2024-02"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("<td>Ana Silva</td>"));
    assert!(html.contains("<td>10/02/2024</td>"));
    assert!(html.contains("downloadPDF("));
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");

    let response = app.clone().oneshot(get("/health/detailed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["checks"]["database"]["status"], "ok");
}
