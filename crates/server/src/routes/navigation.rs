use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    routing::{get, post},
};
use chrono::Utc;
use companion::{
    RoutePlan, RouteRequest, TransportArrival, TransportBoard, iso_timestamp,
    navigation::plan_route,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AppState, error::ApiError};

pub const ROUTE_PLANNING_FAILURE: &str = "Failed to plan route";
pub const DEFAULT_LOCATION: &str = "Current Location";

#[derive(Debug, Serialize, TS)]
pub struct RouteResponse {
    pub route: RoutePlan,
    pub timestamp: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransportQuery {
    pub location: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct TransportResponse {
    pub location: String,
    pub arrivals: Vec<TransportArrival>,
    /// Spoken/visual summary of the first arrival that is running
    pub next_departure: Option<String>,
    pub last_updated: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/navigation/route", post(route_plan))
        .route("/navigation/transport", get(transport_arrivals))
}

pub async fn route_plan(
    State(_state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, ApiError> {
    let request: RouteRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::internal(ROUTE_PLANNING_FAILURE, e))?;
    let route = plan_route(&request)?;

    tracing::info!(steps = route.steps.len(), "Route planned");
    Ok(Json(RouteResponse {
        route,
        timestamp: iso_timestamp(Utc::now()),
    }))
}

pub async fn transport_arrivals(
    State(_state): State<AppState>,
    Query(query): Query<TransportQuery>,
) -> Json<TransportResponse> {
    let location = query
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let board = TransportBoard::new();
    let arrivals = board.arrivals(&location);
    let next_departure = board.next_departure(&location).map(|a| a.announce());

    Json(TransportResponse {
        location,
        arrivals,
        next_departure,
        last_updated: iso_timestamp(Utc::now()),
    })
}
