#![allow(async_fn_in_trait)]

use roster_domain::id::{
    DepartmentId, EmployeeId, EquipmentCategoryId, EquipmentId, PositionId, SpecializationId,
};
use roster_domain::pagination::PageRequest;

use crate::domain::types::{
    Department, DepartmentSortBy, Employee, Equipment, EquipmentCategory, Position,
    PositionSortBy, Specialization,
};
use crate::error::StaffServiceError;

// ── Transactional port (sentinels and cascades) ─────────────────────────────

/// Opens units of work over the staff tables.
pub trait StaffStore: Send + Sync {
    type Work: StaffUnitOfWork;

    async fn begin(&self) -> Result<Self::Work, StaffServiceError>;
}

/// One all-or-nothing unit of work.
///
/// Nothing written through it is visible to other units until
/// [`commit`](Self::commit) succeeds. Dropping it without committing
/// discards every write.
pub trait StaffUnitOfWork: Send + Sync {
    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, StaffServiceError>;

    async fn find_reserve_department(&self) -> Result<Option<Department>, StaffServiceError>;

    /// Insert `department` as the Reserve unless one already exists.
    /// A no-op, not an error, when another Reserve wins the race.
    async fn insert_reserve_department(
        &self,
        department: &Department,
    ) -> Result<(), StaffServiceError>;

    async fn find_position(&self, id: PositionId) -> Result<Option<Position>, StaffServiceError>;

    async fn find_unemployed_position(&self) -> Result<Option<Position>, StaffServiceError>;

    /// Insert `position` as the Unemployed position unless one already exists.
    async fn insert_unemployed_position(
        &self,
        position: &Position,
    ) -> Result<(), StaffServiceError>;

    /// Move every employee of `from` to `department`, holding `position`.
    /// Returns the number of employees moved.
    async fn reassign_department_employees(
        &self,
        from: DepartmentId,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError>;

    /// Move every equipment row of `from` to `department`.
    async fn reassign_department_equipment(
        &self,
        from: DepartmentId,
        department: DepartmentId,
    ) -> Result<u64, StaffServiceError>;

    /// Remove every availability link of a department.
    async fn unlink_department(&self, department: DepartmentId)
    -> Result<u64, StaffServiceError>;

    async fn delete_department(&self, id: DepartmentId) -> Result<(), StaffServiceError>;

    /// Move every employee holding `from` to `position`.
    async fn reassign_position_employees(
        &self,
        from: PositionId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError>;

    /// Remove every availability link of a position.
    async fn unlink_position(&self, position: PositionId) -> Result<u64, StaffServiceError>;

    async fn delete_position(&self, id: PositionId) -> Result<(), StaffServiceError>;

    async fn commit(self) -> Result<(), StaffServiceError>;
}

// ── Plain repositories ──────────────────────────────────────────────────────

pub trait DepartmentRepository: Send + Sync {
    async fn list(
        &self,
        sort_by: DepartmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Department>, StaffServiceError>;

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, StaffServiceError>;

    async fn create(&self, department: &Department) -> Result<(), StaffServiceError>;
}

pub trait PositionRepository: Send + Sync {
    async fn list(
        &self,
        sort_by: PositionSortBy,
        page: PageRequest,
    ) -> Result<Vec<Position>, StaffServiceError>;

    async fn find_by_id(&self, id: PositionId) -> Result<Option<Position>, StaffServiceError>;

    async fn create(&self, position: &Position) -> Result<(), StaffServiceError>;
}

/// Department ↔ position availability links.
pub trait AvailabilityRepository: Send + Sync {
    async fn list_positions(
        &self,
        department: DepartmentId,
    ) -> Result<Vec<Position>, StaffServiceError>;

    /// Create the link; linking twice is not an error.
    async fn link(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<(), StaffServiceError>;

    /// Remove the link. Returns `true` if a row was deleted.
    async fn unlink(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<bool, StaffServiceError>;
}

pub trait EmployeeRepository: Send + Sync {
    async fn list(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Employee>, StaffServiceError>;

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StaffServiceError>;

    async fn create(&self, employee: &Employee) -> Result<(), StaffServiceError>;
}

pub trait EquipmentRepository: Send + Sync {
    async fn list(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Equipment>, StaffServiceError>;

    async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, StaffServiceError>;

    async fn create(&self, equipment: &Equipment) -> Result<(), StaffServiceError>;
}

pub trait SpecializationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Specialization>, StaffServiceError>;

    async fn find_by_id(
        &self,
        id: SpecializationId,
    ) -> Result<Option<Specialization>, StaffServiceError>;

    async fn create(&self, specialization: &Specialization) -> Result<(), StaffServiceError>;

    /// Number of employees holding the specialization.
    async fn count_employees(&self, id: SpecializationId) -> Result<u64, StaffServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: SpecializationId) -> Result<bool, StaffServiceError>;
}

pub trait EquipmentCategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<EquipmentCategory>, StaffServiceError>;

    async fn find_by_id(
        &self,
        id: EquipmentCategoryId,
    ) -> Result<Option<EquipmentCategory>, StaffServiceError>;

    async fn create(&self, category: &EquipmentCategory) -> Result<(), StaffServiceError>;

    /// Number of equipment rows in the category.
    async fn count_equipment(&self, id: EquipmentCategoryId) -> Result<u64, StaffServiceError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: EquipmentCategoryId) -> Result<bool, StaffServiceError>;
}
