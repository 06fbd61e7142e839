use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use roster_domain::id::{DepartmentId, PositionId};
use roster_domain::pagination::PageRequest;

use crate::domain::types::{Department, DepartmentSortBy};
use crate::error::StaffServiceError;
use crate::handlers::position::PositionResponse;
use crate::state::AppState;
use crate::usecase::availability::{
    LinkPositionUseCase, ListDepartmentPositionsUseCase, UnlinkPositionUseCase,
};
use crate::usecase::department::{
    CreateDepartmentUseCase, DeleteDepartmentUseCase, GetDepartmentUseCase, GetDepartmentsUseCase,
};

#[derive(Serialize)]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    pub is_reserve: bool,
    #[serde(serialize_with = "roster_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name,
            is_reserve: department.is_reserve,
            created_at: department.created_at,
        }
    }
}

// ── POST /departments ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

pub async fn create_department(
    State(state): State<AppState>,
    Json(body): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), StaffServiceError> {
    let usecase = CreateDepartmentUseCase {
        repo: state.department_repo(),
    };
    let department = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

// ── GET /departments ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DepartmentListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

pub async fn get_departments(
    State(state): State<AppState>,
    Query(query): Query<DepartmentListQuery>,
) -> Result<Json<Vec<DepartmentResponse>>, StaffServiceError> {
    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(DepartmentSortBy::from_kebab_case)
        .unwrap_or_default();
    let usecase = GetDepartmentsUseCase {
        repo: state.department_repo(),
    };
    let departments = usecase
        .execute(sort_by, PageRequest::from_query(query.per_page, query.page))
        .await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

// ── GET /departments/{id} ────────────────────────────────────────────────────

pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<Json<DepartmentResponse>, StaffServiceError> {
    let usecase = GetDepartmentUseCase {
        repo: state.department_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /departments/{id} ─────────────────────────────────────────────────

pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteDepartmentUseCase {
        store: state.staff_store(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /departments/{id}/positions ──────────────────────────────────────────

pub async fn get_department_positions(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<Json<Vec<PositionResponse>>, StaffServiceError> {
    let usecase = ListDepartmentPositionsUseCase {
        departments: state.department_repo(),
        availability: state.availability_repo(),
    };
    let positions = usecase.execute(id).await?;
    Ok(Json(positions.into_iter().map(Into::into).collect()))
}

// ── PUT /departments/{id}/positions/{position_id} ────────────────────────────

pub async fn link_department_position(
    State(state): State<AppState>,
    Path((id, position_id)): Path<(DepartmentId, PositionId)>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = LinkPositionUseCase {
        departments: state.department_repo(),
        positions: state.position_repo(),
        availability: state.availability_repo(),
    };
    usecase.execute(id, position_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /departments/{id}/positions/{position_id} ─────────────────────────

pub async fn unlink_department_position(
    State(state): State<AppState>,
    Path((id, position_id)): Path<(DepartmentId, PositionId)>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = UnlinkPositionUseCase {
        availability: state.availability_repo(),
    };
    usecase.execute(id, position_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
