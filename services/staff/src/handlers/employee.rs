use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use roster_domain::id::{DepartmentId, EmployeeId, PositionId, SpecializationId};
use roster_domain::pagination::PageRequest;

use crate::domain::types::Employee;
use crate::error::StaffServiceError;
use crate::state::AppState;
use crate::usecase::employee::{
    CreateEmployeeUseCase, GetEmployeeUseCase, GetEmployeesUseCase, NewEmployee,
};

#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub full_name: String,
    pub department_id: Option<String>,
    pub position_id: Option<String>,
    pub specialization_id: String,
    #[serde(serialize_with = "roster_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            full_name: employee.full_name,
            department_id: employee.department_id.map(|d| d.to_string()),
            position_id: employee.position_id.map(|p| p.to_string()),
            specialization_id: employee.specialization_id.to_string(),
            created_at: employee.created_at,
        }
    }
}

// ── POST /employees ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub full_name: String,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub specialization_id: SpecializationId,
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), StaffServiceError> {
    let usecase = CreateEmployeeUseCase {
        employees: state.employee_repo(),
        departments: state.department_repo(),
        positions: state.position_repo(),
        specializations: state.specialization_repo(),
    };
    let employee = usecase
        .execute(NewEmployee {
            full_name: body.full_name,
            department_id: body.department_id,
            position_id: body.position_id,
            specialization_id: body.specialization_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// ── GET /employees ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct EmployeeListQuery {
    pub department_id: Option<DepartmentId>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn get_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, StaffServiceError> {
    let usecase = GetEmployeesUseCase {
        repo: state.employee_repo(),
    };
    let employees = usecase
        .execute(
            query.department_id,
            PageRequest::from_query(query.per_page, query.page),
        )
        .await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

// ── GET /employees/{id} ──────────────────────────────────────────────────────

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeResponse>, StaffServiceError> {
    let usecase = GetEmployeeUseCase {
        repo: state.employee_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}
