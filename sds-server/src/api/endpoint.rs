//! The routing + reliability lookup handler.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use sds_types::error::LookupError;

use crate::render::{to_xml, ResponseFormat};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EndpointParams {
    #[serde(rename = "org-code")]
    org_code: Option<String>,
    #[serde(rename = "service-id")]
    service_id: Option<String>,
}

/// `GET /endpoint?org-code=X&service-id=Y`
///
/// Resolves the record and renders it as JSON or, when the Accept header
/// asks for it, as the fixed XML template. Outcome-to-status mapping lives
/// on [`LookupError`]; this handler only shapes the response body.
pub async fn routing_reliability(
    State(state): State<AppState>,
    Query(params): Query<EndpointParams>,
    headers: HeaderMap,
) -> Response {
    let (Some(org_code), Some(service_id)) = (&params.org_code, &params.service_id) else {
        return (
            StatusCode::BAD_REQUEST,
            "org-code and service-id query parameters are required",
        )
            .into_response();
    };

    let format = ResponseFormat::negotiate(&headers);
    match state.lookup().resolve(org_code, service_id).await {
        Ok(record) => match format {
            ResponseFormat::Json => Json(record).into_response(),
            ResponseFormat::Xml => (
                [(header::CONTENT_TYPE, format.content_type())],
                to_xml(&record, org_code, service_id),
            )
                .into_response(),
        },
        Err(error) => error_response(&error),
    }
}

fn error_response(error: &LookupError) -> Response {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(%error, "lookup failed");
    }
    (status, error.to_string()).into_response()
}
