use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use roster_domain::id::PositionId;
use roster_domain::pagination::PageRequest;

use crate::domain::types::{Position, PositionSortBy};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::position::{
    CreatePositionUseCase, DeletePositionUseCase, GetPositionUseCase, GetPositionsUseCase,
};

#[derive(Serialize)]
pub struct PositionResponse {
    pub id: String,
    pub title: String,
    pub is_unemployed: bool,
    #[serde(serialize_with = "roster_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Position> for PositionResponse {
    fn from(position: Position) -> Self {
        Self {
            id: position.id.to_string(),
            title: position.title,
            is_unemployed: position.is_unemployed,
            created_at: position.created_at,
        }
    }
}

// ── POST /positions ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePositionRequest {
    pub title: String,
}

pub async fn create_position(
    State(state): State<AppState>,
    Json(body): Json<CreatePositionRequest>,
) -> Result<(StatusCode, Json<PositionResponse>), StaffServiceError> {
    let usecase = CreatePositionUseCase {
        repo: state.position_repo(),
    };
    let position = usecase.execute(&body.title).await?;
    Ok((StatusCode::CREATED, Json(position.into())))
}

// ── GET /positions ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PositionListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

pub async fn get_positions(
    State(state): State<AppState>,
    Query(query): Query<PositionListQuery>,
) -> Result<Json<Vec<PositionResponse>>, StaffServiceError> {
    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(PositionSortBy::from_kebab_case)
        .unwrap_or_default();
    let usecase = GetPositionsUseCase {
        repo: state.position_repo(),
    };
    let positions = usecase
        .execute(sort_by, PageRequest::from_query(query.per_page, query.page))
        .await?;
    Ok(Json(positions.into_iter().map(Into::into).collect()))
}

// ── GET /positions/{id} ──────────────────────────────────────────────────────

pub async fn get_position(
    State(state): State<AppState>,
    Path(id): Path<PositionId>,
) -> Result<Json<PositionResponse>, StaffServiceError> {
    let usecase = GetPositionUseCase {
        repo: state.position_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /positions/{id} ───────────────────────────────────────────────────

pub async fn delete_position(
    State(state): State<AppState>,
    Path(id): Path<PositionId>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeletePositionUseCase {
        store: state.staff_store(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
