use roster_domain::id::{DepartmentId, PositionId};

use crate::domain::repository::{AvailabilityRepository, DepartmentRepository, PositionRepository};
use crate::domain::types::Position;
use crate::error::StaffServiceError;

// ── ListDepartmentPositions ──────────────────────────────────────────────────

pub struct ListDepartmentPositionsUseCase<D: DepartmentRepository, A: AvailabilityRepository> {
    pub departments: D,
    pub availability: A,
}

impl<D: DepartmentRepository, A: AvailabilityRepository> ListDepartmentPositionsUseCase<D, A> {
    pub async fn execute(
        &self,
        department: DepartmentId,
    ) -> Result<Vec<Position>, StaffServiceError> {
        self.departments
            .find_by_id(department)
            .await?
            .ok_or(StaffServiceError::DepartmentNotFound)?;
        self.availability.list_positions(department).await
    }
}

// ── LinkPosition ─────────────────────────────────────────────────────────────

/// Makes a position available in a department. Linking twice is a no-op.
pub struct LinkPositionUseCase<D, P, A>
where
    D: DepartmentRepository,
    P: PositionRepository,
    A: AvailabilityRepository,
{
    pub departments: D,
    pub positions: P,
    pub availability: A,
}

impl<D, P, A> LinkPositionUseCase<D, P, A>
where
    D: DepartmentRepository,
    P: PositionRepository,
    A: AvailabilityRepository,
{
    pub async fn execute(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<(), StaffServiceError> {
        self.departments
            .find_by_id(department)
            .await?
            .ok_or(StaffServiceError::DepartmentNotFound)?;
        self.positions
            .find_by_id(position)
            .await?
            .ok_or(StaffServiceError::PositionNotFound)?;
        self.availability.link(department, position).await
    }
}

// ── UnlinkPosition ───────────────────────────────────────────────────────────

pub struct UnlinkPositionUseCase<A: AvailabilityRepository> {
    pub availability: A,
}

impl<A: AvailabilityRepository> UnlinkPositionUseCase<A> {
    pub async fn execute(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<(), StaffServiceError> {
        if !self.availability.unlink(department, position).await? {
            return Err(StaffServiceError::AvailabilityLinkNotFound);
        }
        Ok(())
    }
}
