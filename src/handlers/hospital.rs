//! Hospital route handlers: extraction and delegation to the service.
//! Optional query and body fields stay `Option` so the service owns the
//! missing-argument checks.

use crate::error::AppError;
use crate::model::HospitalDraft;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAddressQuery {
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub hospital_address: Option<String>,
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let found = state.service.get_by_id(params.id).await?;
    // A missing id was already rejected by the service.
    let id = params.id.unwrap_or_default();
    let hospital = found.ok_or_else(|| AppError::NotFound(format!("hospital {}", id)))?;
    Ok(response::success_one(hospital))
}

pub async fn get_by_name_and_address(
    State(state): State<AppState>,
    Query(params): Query<NameAddressQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hospitals = state
        .service
        .get_by_name_and_address(
            params.hospital_name.as_deref(),
            params.hospital_address.as_deref(),
        )
        .await?;
    Ok(response::success_many(hospitals))
}

pub async fn find_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hospitals = state.service.get_all().await?;
    Ok(response::success_many(hospitals))
}

pub async fn find_page(
    State(state): State<AppState>,
    Path((page, size)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let paged = state.service.get_page(page, size).await?;
    Ok(response::success_page(paged))
}

pub async fn insert(
    State(state): State<AppState>,
    Json(draft): Json<HospitalDraft>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.service.insert(&draft).await?;
    Ok(response::success_created(created))
}

pub async fn update(
    State(state): State<AppState>,
    Json(draft): Json<HospitalDraft>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.service.update(&draft).await?;
    Ok(response::success_one(updated))
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete(params.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
