use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, sea_query::OnConflict,
};

use roster_domain::id::{
    DepartmentId, EmployeeId, EquipmentCategoryId, EquipmentId, PositionId, SpecializationId,
};
use roster_domain::pagination::{PageRequest, Sort};
use roster_domain::sentinel::SentinelRole;
use roster_staff_schema::{
    department_positions, departments, employees, equipment, equipment_categories, positions,
    specializations,
};

use crate::domain::repository::{
    AvailabilityRepository, DepartmentRepository, EmployeeRepository, EquipmentCategoryRepository,
    EquipmentRepository, PositionRepository, SpecializationRepository,
};
use crate::domain::types::{
    Department, DepartmentSortBy, Employee, Equipment, EquipmentCategory, Position,
    PositionSortBy, Specialization,
};
use crate::error::StaffServiceError;

/// Map a failed write: foreign key and unique violations become
/// [`StaffServiceError::ConstraintViolation`], anything else is internal.
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> StaffServiceError {
    move |err| match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_) | SqlErr::UniqueConstraintViolation(_)) => {
            StaffServiceError::ConstraintViolation
        }
        _ => StaffServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

// ── Department repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDepartmentRepository {
    pub db: DatabaseConnection,
}

impl DepartmentRepository for DbDepartmentRepository {
    async fn list(
        &self,
        sort_by: DepartmentSortBy,
        page: PageRequest,
    ) -> Result<Vec<Department>, StaffServiceError> {
        let query = departments::Entity::find();
        let query = match sort_by {
            DepartmentSortBy::Name(Sort::Asc) => query.order_by_asc(departments::Column::Name),
            DepartmentSortBy::Name(Sort::Desc) => query.order_by_desc(departments::Column::Name),
            DepartmentSortBy::CreatedAt(Sort::Asc) => {
                query.order_by_asc(departments::Column::CreatedAt)
            }
            DepartmentSortBy::CreatedAt(Sort::Desc) => {
                query.order_by_desc(departments::Column::CreatedAt)
            }
        };
        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list departments")?;
        Ok(models.into_iter().map(department_from_model).collect())
    }

    async fn find_by_id(&self, id: DepartmentId) -> Result<Option<Department>, StaffServiceError> {
        let model = departments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn create(&self, department: &Department) -> Result<(), StaffServiceError> {
        department_active_model(department)
            .insert(&self.db)
            .await
            .map_err(db_err("create department"))?;
        Ok(())
    }
}

pub(crate) fn department_active_model(department: &Department) -> departments::ActiveModel {
    departments::ActiveModel {
        id: Set(department.id.0),
        name: Set(department.name.clone()),
        sentinel_role: Set(department
            .is_reserve
            .then(|| SentinelRole::ReserveDepartment.marker().to_owned())),
        created_at: Set(department.created_at),
    }
}

pub(crate) fn department_from_model(model: departments::Model) -> Department {
    Department {
        id: model.id.into(),
        name: model.name,
        is_reserve: model.sentinel_role.as_deref()
            == Some(SentinelRole::ReserveDepartment.marker()),
        created_at: model.created_at,
    }
}

// ── Position repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPositionRepository {
    pub db: DatabaseConnection,
}

impl PositionRepository for DbPositionRepository {
    async fn list(
        &self,
        sort_by: PositionSortBy,
        page: PageRequest,
    ) -> Result<Vec<Position>, StaffServiceError> {
        let query = positions::Entity::find();
        let query = match sort_by {
            PositionSortBy::Title(Sort::Asc) => query.order_by_asc(positions::Column::Title),
            PositionSortBy::Title(Sort::Desc) => query.order_by_desc(positions::Column::Title),
            PositionSortBy::CreatedAt(Sort::Asc) => {
                query.order_by_asc(positions::Column::CreatedAt)
            }
            PositionSortBy::CreatedAt(Sort::Desc) => {
                query.order_by_desc(positions::Column::CreatedAt)
            }
        };
        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list positions")?;
        Ok(models.into_iter().map(position_from_model).collect())
    }

    async fn find_by_id(&self, id: PositionId) -> Result<Option<Position>, StaffServiceError> {
        let model = positions::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find position by id")?;
        Ok(model.map(position_from_model))
    }

    async fn create(&self, position: &Position) -> Result<(), StaffServiceError> {
        position_active_model(position)
            .insert(&self.db)
            .await
            .map_err(db_err("create position"))?;
        Ok(())
    }
}

pub(crate) fn position_active_model(position: &Position) -> positions::ActiveModel {
    positions::ActiveModel {
        id: Set(position.id.0),
        title: Set(position.title.clone()),
        sentinel_role: Set(position
            .is_unemployed
            .then(|| SentinelRole::UnemployedPosition.marker().to_owned())),
        created_at: Set(position.created_at),
    }
}

pub(crate) fn position_from_model(model: positions::Model) -> Position {
    Position {
        id: model.id.into(),
        title: model.title,
        is_unemployed: model.sentinel_role.as_deref()
            == Some(SentinelRole::UnemployedPosition.marker()),
        created_at: model.created_at,
    }
}

// ── Availability repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAvailabilityRepository {
    pub db: DatabaseConnection,
}

impl AvailabilityRepository for DbAvailabilityRepository {
    async fn list_positions(
        &self,
        department: DepartmentId,
    ) -> Result<Vec<Position>, StaffServiceError> {
        let models = positions::Entity::find()
            .inner_join(department_positions::Entity)
            .filter(department_positions::Column::DepartmentId.eq(department.0))
            .order_by_asc(positions::Column::Title)
            .all(&self.db)
            .await
            .context("list department positions")?;
        Ok(models.into_iter().map(position_from_model).collect())
    }

    async fn link(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<(), StaffServiceError> {
        let link = department_positions::ActiveModel {
            department_id: Set(department.0),
            position_id: Set(position.0),
        };
        department_positions::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    department_positions::Column::DepartmentId,
                    department_positions::Column::PositionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err("link position to department"))?;
        Ok(())
    }

    async fn unlink(
        &self,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<bool, StaffServiceError> {
        let result = department_positions::Entity::delete_many()
            .filter(department_positions::Column::DepartmentId.eq(department.0))
            .filter(department_positions::Column::PositionId.eq(position.0))
            .exec(&self.db)
            .await
            .context("unlink position from department")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn list(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Employee>, StaffServiceError> {
        let mut query = employees::Entity::find();
        if let Some(department) = department {
            query = query.filter(employees::Column::DepartmentId.eq(department.0));
        }
        let models = query
            .order_by_asc(employees::Column::FullName)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list employees")?;
        Ok(models.into_iter().map(employee_from_model).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StaffServiceError> {
        let model = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find employee by id")?;
        Ok(model.map(employee_from_model))
    }

    async fn create(&self, employee: &Employee) -> Result<(), StaffServiceError> {
        employees::ActiveModel {
            id: Set(employee.id.0),
            full_name: Set(employee.full_name.clone()),
            department_id: Set(employee.department_id.map(|d| d.0)),
            position_id: Set(employee.position_id.map(|p| p.0)),
            specialization_id: Set(employee.specialization_id.0),
            created_at: Set(employee.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create employee"))?;
        Ok(())
    }
}

fn employee_from_model(model: employees::Model) -> Employee {
    Employee {
        id: model.id.into(),
        full_name: model.full_name,
        department_id: model.department_id.map(Into::into),
        position_id: model.position_id.map(Into::into),
        specialization_id: model.specialization_id.into(),
        created_at: model.created_at,
    }
}

// ── Equipment repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEquipmentRepository {
    pub db: DatabaseConnection,
}

impl EquipmentRepository for DbEquipmentRepository {
    async fn list(
        &self,
        department: Option<DepartmentId>,
        page: PageRequest,
    ) -> Result<Vec<Equipment>, StaffServiceError> {
        let mut query = equipment::Entity::find();
        if let Some(department) = department {
            query = query.filter(equipment::Column::DepartmentId.eq(department.0));
        }
        let models = query
            .order_by_asc(equipment::Column::Name)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list equipment")?;
        Ok(models.into_iter().map(equipment_from_model).collect())
    }

    async fn find_by_id(&self, id: EquipmentId) -> Result<Option<Equipment>, StaffServiceError> {
        let model = equipment::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find equipment by id")?;
        Ok(model.map(equipment_from_model))
    }

    async fn create(&self, item: &Equipment) -> Result<(), StaffServiceError> {
        equipment::ActiveModel {
            id: Set(item.id.0),
            name: Set(item.name.clone()),
            department_id: Set(item.department_id.map(|d| d.0)),
            category_id: Set(item.category_id.0),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create equipment"))?;
        Ok(())
    }
}

fn equipment_from_model(model: equipment::Model) -> Equipment {
    Equipment {
        id: model.id.into(),
        name: model.name,
        department_id: model.department_id.map(Into::into),
        category_id: model.category_id.into(),
        created_at: model.created_at,
    }
}

// ── Specialization repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSpecializationRepository {
    pub db: DatabaseConnection,
}

impl SpecializationRepository for DbSpecializationRepository {
    async fn list(&self) -> Result<Vec<Specialization>, StaffServiceError> {
        let models = specializations::Entity::find()
            .order_by_asc(specializations::Column::Name)
            .all(&self.db)
            .await
            .context("list specializations")?;
        Ok(models
            .into_iter()
            .map(|m| Specialization {
                id: m.id.into(),
                name: m.name,
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: SpecializationId,
    ) -> Result<Option<Specialization>, StaffServiceError> {
        let model = specializations::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find specialization by id")?;
        Ok(model.map(|m| Specialization {
            id: m.id.into(),
            name: m.name,
        }))
    }

    async fn create(&self, specialization: &Specialization) -> Result<(), StaffServiceError> {
        specializations::ActiveModel {
            id: Set(specialization.id.0),
            name: Set(specialization.name.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create specialization"))?;
        Ok(())
    }

    async fn count_employees(&self, id: SpecializationId) -> Result<u64, StaffServiceError> {
        let count = employees::Entity::find()
            .filter(employees::Column::SpecializationId.eq(id.0))
            .count(&self.db)
            .await
            .context("count employees by specialization")?;
        Ok(count)
    }

    async fn delete(&self, id: SpecializationId) -> Result<bool, StaffServiceError> {
        let result = specializations::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(db_err("delete specialization"))?;
        Ok(result.rows_affected > 0)
    }
}

// ── Equipment category repository ────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEquipmentCategoryRepository {
    pub db: DatabaseConnection,
}

impl EquipmentCategoryRepository for DbEquipmentCategoryRepository {
    async fn list(&self) -> Result<Vec<EquipmentCategory>, StaffServiceError> {
        let models = equipment_categories::Entity::find()
            .order_by_asc(equipment_categories::Column::Name)
            .all(&self.db)
            .await
            .context("list equipment categories")?;
        Ok(models
            .into_iter()
            .map(|m| EquipmentCategory {
                id: m.id.into(),
                name: m.name,
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: EquipmentCategoryId,
    ) -> Result<Option<EquipmentCategory>, StaffServiceError> {
        let model = equipment_categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find equipment category by id")?;
        Ok(model.map(|m| EquipmentCategory {
            id: m.id.into(),
            name: m.name,
        }))
    }

    async fn create(&self, category: &EquipmentCategory) -> Result<(), StaffServiceError> {
        equipment_categories::ActiveModel {
            id: Set(category.id.0),
            name: Set(category.name.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create equipment category"))?;
        Ok(())
    }

    async fn count_equipment(&self, id: EquipmentCategoryId) -> Result<u64, StaffServiceError> {
        let count = equipment::Entity::find()
            .filter(equipment::Column::CategoryId.eq(id.0))
            .count(&self.db)
            .await
            .context("count equipment by category")?;
        Ok(count)
    }

    async fn delete(&self, id: EquipmentCategoryId) -> Result<bool, StaffServiceError> {
        let result = equipment_categories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(db_err("delete equipment category"))?;
        Ok(result.rows_affected > 0)
    }
}
