use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAvailabilityRepository, DbDepartmentRepository, DbEmployeeRepository,
    DbEquipmentCategoryRepository, DbEquipmentRepository, DbPositionRepository,
    DbSpecializationRepository,
};
use crate::infra::unit_of_work::DbStaffStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn staff_store(&self) -> DbStaffStore {
        DbStaffStore {
            db: self.db.clone(),
        }
    }

    pub fn department_repo(&self) -> DbDepartmentRepository {
        DbDepartmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn position_repo(&self) -> DbPositionRepository {
        DbPositionRepository {
            db: self.db.clone(),
        }
    }

    pub fn availability_repo(&self) -> DbAvailabilityRepository {
        DbAvailabilityRepository {
            db: self.db.clone(),
        }
    }

    pub fn employee_repo(&self) -> DbEmployeeRepository {
        DbEmployeeRepository {
            db: self.db.clone(),
        }
    }

    pub fn equipment_repo(&self) -> DbEquipmentRepository {
        DbEquipmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn specialization_repo(&self) -> DbSpecializationRepository {
        DbSpecializationRepository {
            db: self.db.clone(),
        }
    }

    pub fn equipment_category_repo(&self) -> DbEquipmentCategoryRepository {
        DbEquipmentCategoryRepository {
            db: self.db.clone(),
        }
    }
}
