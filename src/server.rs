//! HTTP Service
//!
//! Thin axum router over `CarbonEngine`: JSON envelopes, error mapping and
//! panic isolation.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::CalculatorConfig;
use crate::emissions::{CarbonEngine, DetailedRequest, ErrorKind, EstimateError, QuickRequest};
use crate::services::results::{save_result, SaveRequest, SAVE_ACK_MESSAGE};

pub const HEALTH_MESSAGE: &str = "API de Calculadora de CO2 está funcionando!";
pub const API_NOT_FOUND: &str = "Rota da API não encontrada";

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CarbonEngine>,
}

impl AppState {
    pub fn new(engine: CarbonEngine) -> Self {
        Self { engine: Arc::new(engine) }
    }
}

/// `{ success: true, message?, data }`
#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    data: T,
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { success: true, message: None, data })
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into(), kind: None, path: None }
    }
}

/// Failures a handler can report. Engine validation maps to 400; a body
/// that is not JSON at all maps to 400 without a kind.
pub enum ApiError {
    Estimate(EstimateError),
    BadBody(JsonRejection),
}

impl From<EstimateError> for ApiError {
    fn from(err: EstimateError) -> Self {
        Self::Estimate(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Estimate(err) => {
                warn!(kind = ?err.kind(), "rejected request: {}", err);
                let body = ErrorBody { kind: Some(err.kind()), ..ErrorBody::new(err.to_string()) };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::BadBody(rejection) => {
                warn!("malformed request body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(rejection.body_text()))).into_response()
            }
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new("Erro interno do servidor"))).into_response()
}

/// Panic catching and request tracing shared by every router the service builds.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/calculate/quick", post(calculate_quick))
        .route("/api/calculate/detailed", post(calculate_detailed))
        .route("/api/emission-factors", get(emission_factors))
        .route("/api/averages", get(averages))
        .route("/api/save-result", post(save_result_handler))
        .fallback(not_found)
        .with_state(state);
    with_layers(routes)
}

pub async fn run_server(config: CalculatorConfig) -> Result<()> {
    info!("🌱 Initializing CO2 calculator server...");
    let state = AppState::new(config.build_engine());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("🚀 CO2 API listening at http://{}/api", config.bind_addr);
    info!("🏥 Health check: http://{}/api/health", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "success": true,
        "message": HEALTH_MESSAGE,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

async fn calculate_quick(
    State(state): State<AppState>,
    payload: Result<Json<QuickRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let result = state.engine.calculate_quick(&request)?;
    Ok(ok(result))
}

async fn calculate_detailed(
    State(state): State<AppState>,
    payload: Result<Json<DetailedRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    Ok(ok(state.engine.calculate_detailed(&request)))
}

async fn emission_factors(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.engine.list_emission_factors())
}

async fn averages(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.engine.averages())
}

async fn save_result_handler(
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let saved = save_result(request)?;
    Ok(Json(ApiResponse { success: true, message: Some(SAVE_ACK_MESSAGE), data: saved }))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();
    let message = if path.starts_with("/api") { API_NOT_FOUND } else { "Not Found" };
    let body = ErrorBody { path: Some(path), ..ErrorBody::new(message) };
    (StatusCode::NOT_FOUND, Json(body))
}
