use roster_domain::id::DepartmentId;
use roster_domain::pagination::PageRequest;

use crate::domain::repository::{DepartmentRepository, StaffStore, StaffUnitOfWork};
use crate::domain::types::{Department, DepartmentCascade, DepartmentSortBy, normalize_name};
use crate::error::StaffServiceError;
use crate::usecase::sentinel::SentinelResolver;

// ── CreateDepartment ─────────────────────────────────────────────────────────

pub struct CreateDepartmentUseCase<R: DepartmentRepository> {
    pub repo: R,
}

impl<R: DepartmentRepository> CreateDepartmentUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Department, StaffServiceError> {
        let name = normalize_name(name).ok_or(StaffServiceError::InvalidName)?;
        let department = Department::new(name);
        self.repo.create(&department).await?;
        Ok(department)
    }
}

// ── GetDepartments ───────────────────────────────────────────────────────────

pub struct GetDepartmentsUseCase<R: DepartmentRepository> {
    pub repo: R,
}

impl<R: DepartmentRepository> GetDepartmentsUseCase<R> {
    pub async fn execute(
        &self,
        sort_by: DepartmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Department>, StaffServiceError> {
        self.repo.list(sort_by, page.clamped()).await
    }
}

// ── GetDepartment ────────────────────────────────────────────────────────────

pub struct GetDepartmentUseCase<R: DepartmentRepository> {
    pub repo: R,
}

impl<R: DepartmentRepository> GetDepartmentUseCase<R> {
    pub async fn execute(&self, id: DepartmentId) -> Result<Department, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::DepartmentNotFound)
    }
}

// ── DeleteDepartment ─────────────────────────────────────────────────────────

/// Deletes a department after moving everything that pointed at it.
///
/// Employees go to the Reserve department and the Unemployed position,
/// equipment goes to the Reserve department, availability links are dropped.
/// The whole sequence is one unit of work: on any error nothing is kept.
pub struct DeleteDepartmentUseCase<S: StaffStore> {
    pub store: S,
}

impl<S: StaffStore> DeleteDepartmentUseCase<S> {
    pub async fn execute(&self, id: DepartmentId) -> Result<DepartmentCascade, StaffServiceError> {
        let work = self.store.begin().await?;

        if let Some(reserve) = SentinelResolver::new(&work).get_reserve_department().await? {
            if reserve.id == id {
                tracing::warn!(department_id = %id, "refused to delete reserve department");
                return Err(StaffServiceError::ReserveDepartmentProtected);
            }
        }

        let department = work
            .find_department(id)
            .await?
            .ok_or(StaffServiceError::DepartmentNotFound)?;

        let cascade = reassign_and_delete(&work, &department)
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::DepartmentHasLinkedRecords))?;
        work.commit()
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::DepartmentHasLinkedRecords))?;

        tracing::info!(
            department_id = %cascade.department_id,
            reserve_department_id = %cascade.reserve_department_id,
            employees = cascade.employees_reassigned,
            equipment = cascade.equipment_reassigned,
            links = cascade.links_removed,
            "deleted department"
        );
        Ok(cascade)
    }
}

async fn reassign_and_delete<W: StaffUnitOfWork>(
    work: &W,
    department: &Department,
) -> Result<DepartmentCascade, StaffServiceError> {
    let resolver = SentinelResolver::new(work);
    let reserve = resolver.get_or_create_reserve_department().await?;
    let unemployed = resolver.get_or_create_unemployed_position().await?;

    let employees_reassigned = work
        .reassign_department_employees(department.id, reserve.id, unemployed.id)
        .await?;
    let equipment_reassigned = work
        .reassign_department_equipment(department.id, reserve.id)
        .await?;
    let links_removed = work.unlink_department(department.id).await?;
    work.delete_department(department.id).await?;

    Ok(DepartmentCascade {
        department_id: department.id,
        reserve_department_id: reserve.id,
        unemployed_position_id: unemployed.id,
        employees_reassigned,
        equipment_reassigned,
        links_removed,
    })
}
