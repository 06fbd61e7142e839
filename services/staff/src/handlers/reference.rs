use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use roster_domain::id::{EquipmentCategoryId, SpecializationId};

use crate::domain::types::{EquipmentCategory, Specialization};
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::reference::{
    CreateEquipmentCategoryUseCase, CreateSpecializationUseCase, DeleteEquipmentCategoryUseCase,
    DeleteSpecializationUseCase, GetEquipmentCategoriesUseCase, GetSpecializationsUseCase,
};

/// Shared shape for both lookup tables.
#[derive(Serialize)]
pub struct ReferenceResponse {
    pub id: String,
    pub name: String,
}

impl From<Specialization> for ReferenceResponse {
    fn from(s: Specialization) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
        }
    }
}

impl From<EquipmentCategory> for ReferenceResponse {
    fn from(c: EquipmentCategory) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateReferenceRequest {
    pub name: String,
}

// ── /specializations ─────────────────────────────────────────────────────────

pub async fn create_specialization(
    State(state): State<AppState>,
    Json(body): Json<CreateReferenceRequest>,
) -> Result<(StatusCode, Json<ReferenceResponse>), StaffServiceError> {
    let usecase = CreateSpecializationUseCase {
        repo: state.specialization_repo(),
    };
    let specialization = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(specialization.into())))
}

pub async fn get_specializations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReferenceResponse>>, StaffServiceError> {
    let usecase = GetSpecializationsUseCase {
        repo: state.specialization_repo(),
    };
    let specializations = usecase.execute().await?;
    Ok(Json(specializations.into_iter().map(Into::into).collect()))
}

pub async fn delete_specialization(
    State(state): State<AppState>,
    Path(id): Path<SpecializationId>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteSpecializationUseCase {
        repo: state.specialization_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── /equipment-categories ────────────────────────────────────────────────────

pub async fn create_equipment_category(
    State(state): State<AppState>,
    Json(body): Json<CreateReferenceRequest>,
) -> Result<(StatusCode, Json<ReferenceResponse>), StaffServiceError> {
    let usecase = CreateEquipmentCategoryUseCase {
        repo: state.equipment_category_repo(),
    };
    let category = usecase.execute(&body.name).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn get_equipment_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReferenceResponse>>, StaffServiceError> {
    let usecase = GetEquipmentCategoriesUseCase {
        repo: state.equipment_category_repo(),
    };
    let categories = usecase.execute().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

pub async fn delete_equipment_category(
    State(state): State<AppState>,
    Path(id): Path<EquipmentCategoryId>,
) -> Result<StatusCode, StaffServiceError> {
    let usecase = DeleteEquipmentCategoryUseCase {
        repo: state.equipment_category_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
