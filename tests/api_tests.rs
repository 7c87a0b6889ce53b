//! HTTP surface tests
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use co2_calculator::emissions::CarbonEngine;
use co2_calculator::server::{router, with_layers, AppState};

fn app() -> Router {
    router(AppState::new(CarbonEngine::default()))
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_quick_success() {
    let (status, body) = send(
        Method::POST,
        "/api/calculate/quick",
        Some(json!({"origin": "Rio", "destination": "Niterói", "distance": 20, "transportType": "bus"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["transportType"], "Ônibus");
    assert_eq!(data["emissionKg"], 0.8);
    assert_eq!(data["emissionTons"], 0.0008);
    assert_eq!(data["class"], "low");
    assert_eq!(data["comparison"]["status"], "below_global");
    assert_eq!(data["recommendation"], "✓ Ótima escolha! O ônibus é uma opção sustentável.");
}

#[tokio::test]
async fn test_quick_validation_errors() {
    let (status, body) = send(Method::POST, "/api/calculate/quick", Some(json!({"origin": "Rio"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "MissingField");

    let (status, body) = send(
        Method::POST,
        "/api/calculate/quick",
        Some(json!({"origin": "A", "destination": "B", "distance": 0, "transportType": "car"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidDistance");
    assert_eq!(body["error"], "Distância deve ser maior que 0");

    let (_, body) = send(
        Method::POST,
        "/api/calculate/quick",
        Some(json!({"origin": "A", "destination": "B", "distance": 3, "transportType": "teleporter"})),
    )
    .await;
    assert_eq!(body["kind"], "UnknownTransportKind");
    assert!(body["error"].as_str().unwrap().contains("publicTransport"));
}

#[tokio::test]
async fn test_quick_falsy_fields_are_missing() {
    for body in [
        json!({"origin": false, "destination": "B", "distance": 5, "transportType": "car"}),
        json!({"origin": "A", "destination": "B", "distance": 5, "transportType": 0}),
    ] {
        let (status, body) = send(Method::POST, "/api/calculate/quick", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["kind"], "MissingField");
        assert_eq!(body["error"], "Campos obrigatórios: origin, destination, distance, transportType");
    }
}

#[tokio::test]
async fn test_detailed_huge_quantity_stays_numeric() {
    let (status, body) = send(
        Method::POST,
        "/api/calculate/detailed",
        Some(json!({"consumption": {"meatConsumption": 1e308}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert!(data["categories"]["consumption"]["emissionKg"].is_f64());
    assert_eq!(data["categories"]["consumption"]["percentage"], 100.0);
    assert!(data["totals"]["monthlyKg"].is_f64());
    assert!(data["totals"]["yearlyTons"].is_f64());
    assert!(data["comparison"]["difference"].is_f64());
    assert!(data["comparison"]["percentage"].is_f64());
    assert_eq!(data["comparison"]["status"], "above_brazilian");
    assert!(!data["comparison"]["message"].as_str().unwrap().contains("inf"));
    assert_eq!(data["class"], "high");
}

#[tokio::test]
async fn test_detailed_defaults_missing_categories() {
    let (status, body) = send(
        Method::POST,
        "/api/calculate/detailed",
        Some(json!({"consumption": {"meatConsumption": 12}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["categories"]["consumption"]["emissionKg"], 324.0);
    assert_eq!(data["categories"]["consumption"]["percentage"], 100.0);
    assert_eq!(data["categories"]["transport"]["percentage"], 0.0);
    assert_eq!(data["totals"]["monthlyKg"], 324.0);
    assert_eq!(data["totals"]["yearlyTons"], 3.89);
    assert_eq!(data["class"], "medium");
    assert_eq!(data["recommendations"][0]["category"], "Consumo");
    assert_eq!(data["recommendations"][0]["priority"], "high");
}

#[tokio::test]
async fn test_emission_factors_grouped() {
    let (status, body) = send(Method::GET, "/api/emission-factors", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["transport"].as_array().unwrap().len(), 6);
    assert_eq!(data["energy"][0]["id"], "electricity");
    assert_eq!(data["energy"][0]["unit"], "kg CO2/kWh");
    assert_eq!(data["consumption"][0]["factor"], 27.0);
}

#[tokio::test]
async fn test_averages() {
    let (_, body) = send(Method::GET, "/api/averages", None).await;
    assert_eq!(body["data"]["brazilian"]["annual"], 4.6);
    assert_eq!(body["data"]["brazilian"]["monthly"], 0.38);
    assert_eq!(body["data"]["global"]["unit"], "toneladas CO2/ano");
}

#[tokio::test]
async fn test_save_result() {
    let (status, body) = send(
        Method::POST,
        "/api/save-result",
        Some(json!({"resultType": "quick", "data": {"emissionKg": 1.2}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Resultado salvo com sucesso!");
    assert_eq!(body["data"]["type"], "quick");
    assert_eq!(body["data"]["saved"], true);
    assert!(body["data"]["id"].as_str().unwrap().starts_with("result_"));

    let (status, body) = send(Method::POST, "/api/save-result", Some(json!({"resultType": "quick"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");
}

#[tokio::test]
async fn test_malformed_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/calculate/detailed")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_api_route() {
    let (status, body) = send(Method::GET, "/api/history", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Rota da API não encontrada");
    assert_eq!(body["path"], "/api/history");
}

async fn exploding_handler() -> &'static str {
    panic!("handler blew up")
}

#[tokio::test]
async fn test_handler_panic_is_opaque_500() {
    let app = with_layers(Router::new().route("/api/explode", get(exploding_handler)));
    let request = Request::builder().uri("/api/explode").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Erro interno do servidor");
    assert!(!body.to_string().contains("blew up"));

    // the service keeps answering after a panic
    let (status, _) = send(Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
