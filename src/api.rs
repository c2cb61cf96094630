//! REST API server for the travel planner
//!
//! Exposes recommendation search and the itinerary planner over HTTP.
//! Every response is wrapped in the same `ApiResponse` envelope.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::PlannerError;
use crate::models::PlanRequest;
use crate::planner::TravelPlanner;
use crate::recommendations::{RecommendationService, SearchQuery};
use crate::Result;

const MAX_DAYS: u32 = 30;
const MAX_PEOPLE: u32 = 20;

/// =============================
/// Request Models
/// =============================

/// Body of `POST /api/ai-planner`. Fields are optional here so a missing
/// one can be reported by name.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct PlannerRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub travel_type: Option<String>,
    pub budget: Option<i64>,
    pub num_days: Option<u32>,
    pub num_people: Option<u32>,
    pub hotel_preference: Option<String>,
    #[serde(default)]
    pub user_set_budget: bool,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

type ApiResult = (StatusCode, Json<ApiResponse>);

fn error_status(err: &PlannerError) -> StatusCode {
    match err {
        e if e.is_client_error() => StatusCode::BAD_REQUEST,
        PlannerError::DataSource(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<T: Serialize>(result: Result<T>) -> ApiResult {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))),
        Err(e) => {
            let status = error_status(&e);
            warn!(status = %status, error = %e, "Request failed");
            (status, Json(ApiResponse::error(e.to_string())))
        }
    }
}

fn rejected(rejection: JsonRejection) -> ApiResult {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub planner: TravelPlanner,
    pub recommendations: Arc<RecommendationService>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl ApiState {
    pub fn new(recommendations: RecommendationService, rng: StdRng) -> Self {
        Self {
            planner: TravelPlanner::new(),
            recommendations: Arc::new(recommendations),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

/// =============================
/// Health Endpoint
/// =============================

async fn health(State(state): State<ApiState>) -> Json<ApiResponse> {
    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "data_source": state.recommendations.source_name(),
    })))
}

/// =============================
/// Recommendation Search
/// =============================

async fn search(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<SearchQuery>, JsonRejection>,
) -> ApiResult {
    let Json(query) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    info!(destination = %query.destination, "Received search request");
    respond(state.recommendations.get_recommendations(&query).await)
}

/// =============================
/// AI Planner Endpoints
/// =============================

async fn planner_questions(State(state): State<ApiState>) -> ApiResult {
    respond(Ok(serde_json::json!({
        "questions": state.planner.conversation_questions(),
        "travel_types": state.planner.available_travel_types(),
    })))
}

async fn planner_status(State(state): State<ApiState>) -> ApiResult {
    respond(Ok(serde_json::json!({
        "status": "ready",
        "data_source": state.recommendations.source_name(),
        "travel_types": state.planner.available_travel_types(),
    })))
}

async fn plan_trip(
    State(state): State<ApiState>,
    payload: std::result::Result<Json<PlannerRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    respond(run_planner(&state, req).await)
}

async fn run_planner(state: &ApiState, req: PlannerRequest) -> Result<serde_json::Value> {
    let mut request = validate_planner_request(req)?;

    info!(
        destination = %request.destination,
        travel_type = %request.travel_type,
        num_days = request.num_days,
        num_people = request.num_people,
        "Received planner request"
    );

    let check_in = Utc::now().date_naive() + Duration::days(1);
    let check_out = check_in + Duration::days(i64::from(request.num_days));
    let query = SearchQuery {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        check_in: check_in.format("%Y-%m-%d").to_string(),
        check_out: check_out.format("%Y-%m-%d").to_string(),
        people: request.num_people,
        rooms: (request.num_people / 2).max(1),
        budget: Some(request.budget),
    };

    let recommendations = state.recommendations.get_recommendations(&query).await?;
    request.hotels = recommendations.hotels.clone();
    request.transports = recommendations.transports.clone();
    request.attractions = recommendations.attractions.clone();

    let response = {
        let mut rng = state.rng.lock().await;
        state.planner.generate_travel_plan(&request, &mut *rng)
    };

    let mut data = serde_json::to_value(&response)?;
    data["recommendations"] = serde_json::to_value(&recommendations)?;
    Ok(data)
}

/// Check required fields and ranges, producing a planner request with no
/// candidates attached yet.
///
/// A blank `origin` or `travel_type` is accepted; downstream they default to
/// "Your City" and the culture theme. A blank `destination` is missing.
pub fn validate_planner_request(req: PlannerRequest) -> Result<PlanRequest> {
    let origin = required(req.origin, "origin")?;
    let destination = required(req.destination, "destination")?;
    if destination.trim().is_empty() {
        return Err(PlannerError::MissingField("destination".to_string()));
    }
    let travel_type = required(req.travel_type, "travel_type")?;
    let budget = required(req.budget, "budget")?;
    let num_days = required(req.num_days, "num_days")?;
    let num_people = required(req.num_people, "num_people")?;

    if !(1..=MAX_DAYS).contains(&num_days) {
        return Err(PlannerError::InvalidRequest(format!(
            "num_days must be between 1 and {}",
            MAX_DAYS
        )));
    }
    if !(1..=MAX_PEOPLE).contains(&num_people) {
        return Err(PlannerError::InvalidRequest(format!(
            "num_people must be between 1 and {}",
            MAX_PEOPLE
        )));
    }
    if budget < 0 {
        return Err(PlannerError::InvalidRequest(
            "budget must not be negative".to_string(),
        ));
    }

    Ok(PlanRequest {
        origin: origin.trim().to_string(),
        destination: destination.trim().to_string(),
        travel_type,
        hotel_preference: req.hotel_preference,
        budget,
        num_days,
        num_people,
        hotels: Vec::new(),
        transports: Vec::new(),
        attractions: Vec::new(),
        user_set_budget: req.user_set_budget,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| PlannerError::MissingField(field.to_string()))
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", post(search))
        .route("/api/ai-planner", get(planner_questions).post(plan_trip))
        .route("/api/ai-planner/status", get(planner_status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(state: ApiState, port: u16) -> Result<()> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
