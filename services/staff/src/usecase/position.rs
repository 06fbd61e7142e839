use roster_domain::id::PositionId;
use roster_domain::pagination::PageRequest;

use crate::domain::repository::{PositionRepository, StaffStore, StaffUnitOfWork};
use crate::domain::types::{Position, PositionCascade, PositionSortBy, normalize_name};
use crate::error::StaffServiceError;
use crate::usecase::sentinel::SentinelResolver;

// ── CreatePosition ───────────────────────────────────────────────────────────

pub struct CreatePositionUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> CreatePositionUseCase<R> {
    pub async fn execute(&self, title: &str) -> Result<Position, StaffServiceError> {
        let title = normalize_name(title).ok_or(StaffServiceError::InvalidName)?;
        let position = Position::new(title);
        self.repo.create(&position).await?;
        Ok(position)
    }
}

// ── GetPositions ─────────────────────────────────────────────────────────────

pub struct GetPositionsUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> GetPositionsUseCase<R> {
    pub async fn execute(
        &self,
        sort_by: PositionSortBy,
        page: PageRequest,
    ) -> Result<Vec<Position>, StaffServiceError> {
        self.repo.list(sort_by, page.clamped()).await
    }
}

// ── GetPosition ──────────────────────────────────────────────────────────────

pub struct GetPositionUseCase<R: PositionRepository> {
    pub repo: R,
}

impl<R: PositionRepository> GetPositionUseCase<R> {
    pub async fn execute(&self, id: PositionId) -> Result<Position, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::PositionNotFound)
    }
}

// ── DeletePosition ───────────────────────────────────────────────────────────

/// Deletes a position after moving its employees to the Unemployed position
/// and dropping its availability links, as one unit of work.
pub struct DeletePositionUseCase<S: StaffStore> {
    pub store: S,
}

impl<S: StaffStore> DeletePositionUseCase<S> {
    pub async fn execute(&self, id: PositionId) -> Result<PositionCascade, StaffServiceError> {
        let work = self.store.begin().await?;

        let position = work
            .find_position(id)
            .await?
            .ok_or(StaffServiceError::PositionNotFound)?;
        if position.is_unemployed {
            tracing::warn!(position_id = %id, "refused to delete unemployed position");
            return Err(StaffServiceError::UnemployedPositionProtected);
        }

        let cascade = reassign_and_delete(&work, &position)
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::PositionDeleteFailed))?;
        work.commit()
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::PositionDeleteFailed))?;

        tracing::info!(
            position_id = %cascade.position_id,
            unemployed_position_id = %cascade.unemployed_position_id,
            employees = cascade.employees_reassigned,
            links = cascade.links_removed,
            "deleted position"
        );
        Ok(cascade)
    }
}

async fn reassign_and_delete<W: StaffUnitOfWork>(
    work: &W,
    position: &Position,
) -> Result<PositionCascade, StaffServiceError> {
    let unemployed = SentinelResolver::new(work)
        .get_or_create_unemployed_position()
        .await?;

    let employees_reassigned = work
        .reassign_position_employees(position.id, unemployed.id)
        .await?;
    let links_removed = work.unlink_position(position.id).await?;
    work.delete_position(position.id).await?;

    Ok(PositionCascade {
        position_id: position.id,
        unemployed_position_id: unemployed.id,
        employees_reassigned,
        links_removed,
    })
}
