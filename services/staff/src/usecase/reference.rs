//! Specializations and equipment categories: small lookup tables that
//! employees and equipment point at.

use roster_domain::id::{EquipmentCategoryId, SpecializationId};

use crate::domain::repository::{EquipmentCategoryRepository, SpecializationRepository};
use crate::domain::types::{EquipmentCategory, Specialization, normalize_name};
use crate::error::StaffServiceError;

// ── Specializations ──────────────────────────────────────────────────────────

pub struct CreateSpecializationUseCase<R: SpecializationRepository> {
    pub repo: R,
}

impl<R: SpecializationRepository> CreateSpecializationUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Specialization, StaffServiceError> {
        let name = normalize_name(name).ok_or(StaffServiceError::InvalidName)?;
        let specialization = Specialization {
            id: SpecializationId::generate(),
            name,
        };
        self.repo.create(&specialization).await?;
        Ok(specialization)
    }
}

pub struct GetSpecializationsUseCase<R: SpecializationRepository> {
    pub repo: R,
}

impl<R: SpecializationRepository> GetSpecializationsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Specialization>, StaffServiceError> {
        self.repo.list().await
    }
}

pub struct DeleteSpecializationUseCase<R: SpecializationRepository> {
    pub repo: R,
}

impl<R: SpecializationRepository> DeleteSpecializationUseCase<R> {
    pub async fn execute(&self, id: SpecializationId) -> Result<(), StaffServiceError> {
        if self.repo.count_employees(id).await? > 0 {
            return Err(StaffServiceError::SpecializationInUse);
        }
        // An employee added after the count trips the foreign key instead.
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::SpecializationInUse))?;
        if !deleted {
            return Err(StaffServiceError::SpecializationNotFound);
        }
        Ok(())
    }
}

// ── Equipment categories ─────────────────────────────────────────────────────

pub struct CreateEquipmentCategoryUseCase<R: EquipmentCategoryRepository> {
    pub repo: R,
}

impl<R: EquipmentCategoryRepository> CreateEquipmentCategoryUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<EquipmentCategory, StaffServiceError> {
        let name = normalize_name(name).ok_or(StaffServiceError::InvalidName)?;
        let category = EquipmentCategory {
            id: EquipmentCategoryId::generate(),
            name,
        };
        self.repo.create(&category).await?;
        Ok(category)
    }
}

pub struct GetEquipmentCategoriesUseCase<R: EquipmentCategoryRepository> {
    pub repo: R,
}

impl<R: EquipmentCategoryRepository> GetEquipmentCategoriesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<EquipmentCategory>, StaffServiceError> {
        self.repo.list().await
    }
}

pub struct DeleteEquipmentCategoryUseCase<R: EquipmentCategoryRepository> {
    pub repo: R,
}

impl<R: EquipmentCategoryRepository> DeleteEquipmentCategoryUseCase<R> {
    pub async fn execute(&self, id: EquipmentCategoryId) -> Result<(), StaffServiceError> {
        if self.repo.count_equipment(id).await? > 0 {
            return Err(StaffServiceError::EquipmentCategoryInUse);
        }
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| e.on_constraint(StaffServiceError::EquipmentCategoryInUse))?;
        if !deleted {
            return Err(StaffServiceError::EquipmentCategoryNotFound);
        }
        Ok(())
    }
}
