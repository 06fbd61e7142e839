use chrono::Utc;
use roster_domain::id::{DepartmentId, EmployeeId, PositionId, SpecializationId};
use roster_domain::pagination::PageRequest;

use crate::domain::repository::{
    DepartmentRepository, EmployeeRepository, PositionRepository, SpecializationRepository,
};
use crate::domain::types::{Employee, normalize_name};
use crate::error::StaffServiceError;

// ── CreateEmployee ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub full_name: String,
    pub department_id: Option<DepartmentId>,
    pub position_id: Option<PositionId>,
    pub specialization_id: SpecializationId,
}

pub struct CreateEmployeeUseCase<E, D, P, S>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    S: SpecializationRepository,
{
    pub employees: E,
    pub departments: D,
    pub positions: P,
    pub specializations: S,
}

impl<E, D, P, S> CreateEmployeeUseCase<E, D, P, S>
where
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    S: SpecializationRepository,
{
    pub async fn execute(&self, input: NewEmployee) -> Result<Employee, StaffServiceError> {
        let full_name = normalize_name(&input.full_name).ok_or(StaffServiceError::InvalidName)?;

        if let Some(department) = input.department_id {
            self.departments
                .find_by_id(department)
                .await?
                .ok_or(StaffServiceError::DepartmentNotFound)?;
        }
        if let Some(position) = input.position_id {
            self.positions
                .find_by_id(position)
                .await?
                .ok_or(StaffServiceError::PositionNotFound)?;
        }
        self.specializations
            .find_by_id(input.specialization_id)
            .await?
            .ok_or(StaffServiceError::SpecializationNotFound)?;

        let employee = Employee {
            id: EmployeeId::generate(),
            full_name,
            department_id: input.department_id,
            position_id: input.position_id,
            specialization_id: input.specialization_id,
            created_at: Utc::now(),
        };
        self.employees.create(&employee).await?;
        Ok(employee)
    }
}

// ── GetEmployees ─────────────────────────────────────────────────────────────

pub struct GetEmployeesUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetEmployeesUseCase<R> {
    pub async fn execute(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Employee>, StaffServiceError> {
        self.repo.list(department, page.clamped()).await
    }
}

// ── GetEmployee ──────────────────────────────────────────────────────────────

pub struct GetEmployeeUseCase<R: EmployeeRepository> {
    pub repo: R,
}

impl<R: EmployeeRepository> GetEmployeeUseCase<R> {
    pub async fn execute(&self, id: EmployeeId) -> Result<Employee, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::EmployeeNotFound)
    }
}
