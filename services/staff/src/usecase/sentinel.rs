use anyhow::anyhow;

use crate::domain::repository::{StaffStore, StaffUnitOfWork};
use crate::domain::types::{Department, Position, Sentinels};
use crate::error::StaffServiceError;

// ── SentinelResolver ─────────────────────────────────────────────────────────

/// Finds, or lazily creates, the Reserve department and the Unemployed
/// position inside a caller's unit of work.
///
/// Creation is insert-if-absent followed by a re-read, so two units racing
/// to create the same sentinel end up reading the same row.
pub struct SentinelResolver<'a, W: StaffUnitOfWork> {
    work: &'a W,
}

impl<'a, W: StaffUnitOfWork> SentinelResolver<'a, W> {
    pub fn new(work: &'a W) -> Self {
        Self { work }
    }

    pub async fn get_reserve_department(&self) -> Result<Option<Department>, StaffServiceError> {
        self.work.find_reserve_department().await
    }

    pub async fn get_or_create_reserve_department(
        &self,
    ) -> Result<Department, StaffServiceError> {
        if let Some(existing) = self.work.find_reserve_department().await? {
            return Ok(existing);
        }
        let candidate = Department::reserve();
        self.work.insert_reserve_department(&candidate).await?;
        let reserve = self
            .work
            .find_reserve_department()
            .await?
            .ok_or_else(|| anyhow!("reserve department missing after insert"))?;
        if reserve.id == candidate.id {
            tracing::info!(department_id = %reserve.id, "created reserve department");
        }
        Ok(reserve)
    }

    pub async fn get_unemployed_position(&self) -> Result<Option<Position>, StaffServiceError> {
        self.work.find_unemployed_position().await
    }

    /// Fails with [`StaffServiceError::DefaultPositionMissing`] if the
    /// position is still absent after the insert.
    pub async fn get_or_create_unemployed_position(
        &self,
    ) -> Result<Position, StaffServiceError> {
        if let Some(existing) = self.work.find_unemployed_position().await? {
            return Ok(existing);
        }
        let candidate = Position::unemployed();
        self.work.insert_unemployed_position(&candidate).await?;
        let unemployed = self
            .work
            .find_unemployed_position()
            .await?
            .ok_or(StaffServiceError::DefaultPositionMissing)?;
        if unemployed.id == candidate.id {
            tracing::info!(position_id = %unemployed.id, "created unemployed position");
        }
        Ok(unemployed)
    }
}

// ── EnsureSentinels ──────────────────────────────────────────────────────────

/// Resolves both sentinels in one committed unit of work.
pub struct EnsureSentinelsUseCase<S: StaffStore> {
    pub store: S,
}

impl<S: StaffStore> EnsureSentinelsUseCase<S> {
    pub async fn execute(&self) -> Result<Sentinels, StaffServiceError> {
        let work = self.store.begin().await?;
        let sentinels = {
            let resolver = SentinelResolver::new(&work);
            let reserve = resolver.get_or_create_reserve_department().await?;
            let unemployed = resolver.get_or_create_unemployed_position().await?;
            Sentinels {
                reserve_department_id: reserve.id,
                unemployed_position_id: unemployed.id,
            }
        };
        work.commit().await?;
        Ok(sentinels)
    }
}
