use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use roster_domain::id::{DepartmentId, EquipmentCategoryId, EquipmentId};
use roster_domain::pagination::PageRequest;

use crate::domain::types::Equipment;
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::equipment::{
    CreateEquipmentUseCase, GetEquipmentListUseCase, GetEquipmentUseCase, NewEquipment,
};

#[derive(Serialize)]
pub struct EquipmentResponse {
    pub id: String,
    pub name: String,
    pub department_id: Option<String>,
    pub category_id: String,
    #[serde(serialize_with = "roster_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Equipment> for EquipmentResponse {
    fn from(item: Equipment) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            department_id: item.department_id.map(|d| d.to_string()),
            category_id: item.category_id.to_string(),
            created_at: item.created_at,
        }
    }
}

// ── POST /equipment ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateEquipmentRequest {
    pub name: String,
    pub department_id: Option<DepartmentId>,
    pub category_id: EquipmentCategoryId,
}

pub async fn create_equipment(
    State(state): State<AppState>,
    Json(body): Json<CreateEquipmentRequest>,
) -> Result<(StatusCode, Json<EquipmentResponse>), StaffServiceError> {
    let usecase = CreateEquipmentUseCase {
        equipment: state.equipment_repo(),
        departments: state.department_repo(),
        categories: state.equipment_category_repo(),
    };
    let item = usecase
        .execute(NewEquipment {
            name: body.name,
            department_id: body.department_id,
            category_id: body.category_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

// ── GET /equipment ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct EquipmentListQuery {
    pub department_id: Option<DepartmentId>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn get_equipment_list(
    State(state): State<AppState>,
    Query(query): Query<EquipmentListQuery>,
) -> Result<Json<Vec<EquipmentResponse>>, StaffServiceError> {
    let usecase = GetEquipmentListUseCase {
        repo: state.equipment_repo(),
    };
    let items = usecase
        .execute(
            query.department_id,
            PageRequest::from_query(query.per_page, query.page),
        )
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

// ── GET /equipment/{id} ──────────────────────────────────────────────────────

pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<EquipmentId>,
) -> Result<Json<EquipmentResponse>, StaffServiceError> {
    let usecase = GetEquipmentUseCase {
        repo: state.equipment_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}
