use crate::core::error::DirectoryError;
use crate::core::state::AppState;
use crate::handlers::account::require_session;
use crate::models::blood_bank::BloodBank;
use crate::models::forms::{AreaListResponse, DirectoryQuery, DirectoryResponse};
use crate::models::user::BloodGroup;
use crate::stores::directory;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::debug;

/// List blood banks, optionally filtered by blood group and/or area
///
/// GET /banks?blood_group=<group>&area=<area> (Authorization: Bearer <token>)
pub async fn banks_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<DirectoryQuery>,
) -> Result<Response, DirectoryError> {
    let session = require_session(&state, &headers)?;

    let banks = filter_banks(&params)?;

    debug!(
        username = %session.username,
        blood_group = ?params.blood_group,
        area = ?params.area,
        matches = banks.len(),
        "Directory lookup"
    );

    Ok((
        StatusCode::OK,
        Json(DirectoryResponse {
            success: true,
            count: banks.len(),
            banks,
        }),
    )
        .into_response())
}

/// List the areas the directory covers
///
/// GET /areas
pub async fn areas_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(AreaListResponse {
            success: true,
            areas: directory::areas(),
        }),
    )
}

fn filter_banks(params: &DirectoryQuery) -> Result<Vec<BloodBank>, DirectoryError> {
    let blood_group = match non_empty(&params.blood_group) {
        Some(raw) => Some(
            raw.parse::<BloodGroup>()
                .map_err(|_| DirectoryError::InvalidBloodGroup(raw.to_string()))?,
        ),
        None => None,
    };

    let area = match non_empty(&params.area) {
        Some(raw) if directory::is_known_area(raw) => Some(raw),
        Some(raw) => return Err(DirectoryError::UnknownArea(raw.to_string())),
        None => None,
    };

    let banks = match blood_group {
        Some(group) => directory::by_blood_group(group),
        None => directory::BLOOD_BANKS.iter().collect(),
    };

    Ok(banks
        .into_iter()
        .filter(|bank| area.map_or(true, |a| bank.is_in(a)))
        .copied()
        .collect())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
