//! Administrative cache control.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use sds_types::models::LookupKey;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InvalidateParams {
    #[serde(rename = "org-code")]
    org_code: Option<String>,
    #[serde(rename = "service-id")]
    service_id: Option<String>,
}

/// `DELETE /cache?org-code=X&service-id=Y` drops one cached outcome;
/// `DELETE /cache` with no parameters drops them all. Used to force-refresh
/// after a known directory update.
pub async fn invalidate_cache(
    State(state): State<AppState>,
    Query(params): Query<InvalidateParams>,
) -> Response {
    match (&params.org_code, &params.service_id) {
        (Some(org_code), Some(service_id)) => match LookupKey::new(org_code, service_id) {
            Ok(key) => {
                let invalidated = state.lookup().invalidate(&key);
                Json(serde_json::json!({ "invalidated": invalidated })).into_response()
            }
            Err(error) => (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
        },
        (None, None) => {
            let dropped = state.lookup().cached_entries();
            state.lookup().clear_cache();
            Json(serde_json::json!({ "invalidated": true, "dropped": dropped })).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            "org-code and service-id must be supplied together",
        )
            .into_response(),
    }
}

/// `GET /status`
pub async fn get_status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "cached_entries": state.lookup().cached_entries(),
        "cache_ttl_secs": state.config().cache.ttl_secs,
        "uptime_secs": state.uptime_secs(),
    }))
}
