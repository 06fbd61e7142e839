use chrono::Utc;
use roster_domain::id::{DepartmentId, EquipmentCategoryId, EquipmentId};
use roster_domain::pagination::PageRequest;

use crate::domain::repository::{
    DepartmentRepository, EquipmentCategoryRepository, EquipmentRepository,
};
use crate::domain::types::{Equipment, normalize_name};
use crate::error::StaffServiceError;

// ── CreateEquipment ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub department_id: Option<DepartmentId>,
    pub category_id: EquipmentCategoryId,
}

pub struct CreateEquipmentUseCase<Q, D, C>
where
    Q: EquipmentRepository,
    D: DepartmentRepository,
    C: EquipmentCategoryRepository,
{
    pub equipment: Q,
    pub departments: D,
    pub categories: C,
}

impl<Q, D, C> CreateEquipmentUseCase<Q, D, C>
where
    Q: EquipmentRepository,
    D: DepartmentRepository,
    C: EquipmentCategoryRepository,
{
    pub async fn execute(&self, input: NewEquipment) -> Result<Equipment, StaffServiceError> {
        let name = normalize_name(&input.name).ok_or(StaffServiceError::InvalidName)?;

        if let Some(department) = input.department_id {
            self.departments
                .find_by_id(department)
                .await?
                .ok_or(StaffServiceError::DepartmentNotFound)?;
        }
        self.categories
            .find_by_id(input.category_id)
            .await?
            .ok_or(StaffServiceError::EquipmentCategoryNotFound)?;

        let equipment = Equipment {
            id: EquipmentId::generate(),
            name,
            department_id: input.department_id,
            category_id: input.category_id,
            created_at: Utc::now(),
        };
        self.equipment.create(&equipment).await?;
        Ok(equipment)
    }
}

// ── GetEquipmentList ─────────────────────────────────────────────────────────

pub struct GetEquipmentListUseCase<R: EquipmentRepository> {
    pub repo: R,
}

impl<R: EquipmentRepository> GetEquipmentListUseCase<R> {
    pub async fn execute(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Equipment>, StaffServiceError> {
        self.repo.list(department, page.clamped()).await
    }
}

// ── GetEquipment ─────────────────────────────────────────────────────────────

pub struct GetEquipmentUseCase<R: EquipmentRepository> {
    pub repo: R,
}

impl<R: EquipmentRepository> GetEquipmentUseCase<R> {
    pub async fn execute(&self, id: EquipmentId) -> Result<Equipment, StaffServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StaffServiceError::EquipmentNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Department, DepartmentSortBy, EquipmentCategory};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockEquipmentRepo {
        equipment: Mutex<Vec<Equipment>>,
    }

    impl EquipmentRepository for MockEquipmentRepo {
        async fn list(
            &self,
            department: Option<DepartmentId>,
            _page: PageRequest,
        ) -> Result<Vec<Equipment>, StaffServiceError> {
            Ok(self
                .equipment
                .lock()
                .unwrap()
                .iter()
                .filter(|q| department.is_none() || q.department_id == department)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, StaffServiceError> {
            Ok(self
                .equipment
                .lock()
                .unwrap()
                .iter()
                .find(|q| q.id == id)
                .cloned())
        }

        async fn create(&self, equipment: &Equipment) -> Result<(), StaffServiceError> {
            self.equipment.lock().unwrap().push(equipment.clone());
            Ok(())
        }
    }

    struct MockDepartmentRepo(Vec<Department>);

    impl DepartmentRepository for MockDepartmentRepo {
        async fn list(
            &self,
            _sort_by: DepartmentSortBy,
            _page: PageRequest,
        ) -> Result<Vec<Department>, StaffServiceError> {
            Ok(self.0.clone())
        }

        async fn find_by_id(
            &self,
            id: DepartmentId,
        ) -> Result<Option<Department>, StaffServiceError> {
            Ok(self.0.iter().find(|d| d.id == id).cloned())
        }

        async fn create(&self, _department: &Department) -> Result<(), StaffServiceError> {
            Ok(())
        }
    }

    struct MockCategoryRepo(Vec<EquipmentCategory>);

    impl EquipmentCategoryRepository for MockCategoryRepo {
        async fn list(&self) -> Result<Vec<EquipmentCategory>, StaffServiceError> {
            Ok(self.0.clone())
        }

        async fn find_by_id(
            &self,
            id: EquipmentCategoryId,
        ) -> Result<Option<EquipmentCategory>, StaffServiceError> {
            Ok(self.0.iter().find(|c| c.id == id).cloned())
        }

        async fn create(&self, _category: &EquipmentCategory) -> Result<(), StaffServiceError> {
            Ok(())
        }

        async fn count_equipment(
            &self,
            _id: EquipmentCategoryId,
        ) -> Result<u64, StaffServiceError> {
            Ok(0)
        }

        async fn delete(&self, _id: EquipmentCategoryId) -> Result<bool, StaffServiceError> {
            Ok(false)
        }
    }

    fn laptops() -> EquipmentCategory {
        EquipmentCategory {
            id: EquipmentCategoryId::generate(),
            name: "Laptops".into(),
        }
    }

    #[tokio::test]
    async fn should_create_equipment_in_department() {
        let it = Department::new("IT".into());
        let category = laptops();
        let uc = CreateEquipmentUseCase {
            equipment: MockEquipmentRepo::default(),
            departments: MockDepartmentRepo(vec![it.clone()]),
            categories: MockCategoryRepo(vec![category.clone()]),
        };

        let laptop = uc
            .execute(NewEquipment {
                name: "ThinkPad T14".into(),
                department_id: Some(it.id),
                category_id: category.id,
            })
            .await
            .unwrap();

        let get = GetEquipmentUseCase { repo: uc.equipment };
        assert_eq!(get.execute(laptop.id).await.unwrap(), laptop);
    }

    #[tokio::test]
    async fn should_reject_unknown_category() {
        let uc = CreateEquipmentUseCase {
            equipment: MockEquipmentRepo::default(),
            departments: MockDepartmentRepo(vec![]),
            categories: MockCategoryRepo(vec![]),
        };
        let result = uc
            .execute(NewEquipment {
                name: "Monitor".into(),
                department_id: None,
                category_id: EquipmentCategoryId::generate(),
            })
            .await;
        assert!(matches!(
            result,
            Err(StaffServiceError::EquipmentCategoryNotFound)
        ));
    }

    #[tokio::test]
    async fn should_return_equipment_not_found() {
        let uc = GetEquipmentUseCase {
            repo: MockEquipmentRepo::default(),
        };
        let result = uc.execute(EquipmentId::generate()).await;
        assert!(matches!(result, Err(StaffServiceError::EquipmentNotFound)));
    }
}
