use anyhow::Context as _;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    TransactionTrait, sea_query::Expr, sea_query::OnConflict,
};

use roster_domain::id::{DepartmentId, PositionId};
use roster_domain::sentinel::SentinelRole;
use roster_staff_schema::{department_positions, departments, employees, equipment, positions};

use crate::domain::repository::{StaffStore, StaffUnitOfWork};
use crate::domain::types::{Department, Position};
use crate::error::StaffServiceError;
use crate::infra::db::{
    db_err, department_active_model, department_from_model, position_active_model,
    position_from_model,
};

/// Opens a database transaction per unit of work.
#[derive(Clone)]
pub struct DbStaffStore {
    pub db: DatabaseConnection,
}

impl StaffStore for DbStaffStore {
    type Work = DbUnitOfWork;

    async fn begin(&self) -> Result<DbUnitOfWork, StaffServiceError> {
        let txn = self.db.begin().await.context("begin transaction")?;
        Ok(DbUnitOfWork { txn })
    }
}

/// Dropping the transaction without [`commit`](StaffUnitOfWork::commit)
/// rolls it back.
pub struct DbUnitOfWork {
    txn: DatabaseTransaction,
}

impl StaffUnitOfWork for DbUnitOfWork {
    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> Result<Option<Department>, StaffServiceError> {
        let model = departments::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn find_reserve_department(&self) -> Result<Option<Department>, StaffServiceError> {
        let model = departments::Entity::find()
            .filter(departments::Column::SentinelRole.eq(SentinelRole::ReserveDepartment.marker()))
            .one(&self.txn)
            .await
            .context("find reserve department")?;
        Ok(model.map(department_from_model))
    }

    async fn insert_reserve_department(
        &self,
        department: &Department,
    ) -> Result<(), StaffServiceError> {
        departments::Entity::insert(department_active_model(department))
            .on_conflict(
                OnConflict::column(departments::Column::SentinelRole)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.txn)
            .await
            .map_err(db_err("insert reserve department"))?;
        Ok(())
    }

    async fn find_position(&self, id: PositionId) -> Result<Option<Position>, StaffServiceError> {
        let model = positions::Entity::find_by_id(id.0)
            .one(&self.txn)
            .await
            .context("find position by id")?;
        Ok(model.map(position_from_model))
    }

    async fn find_unemployed_position(&self) -> Result<Option<Position>, StaffServiceError> {
        let model = positions::Entity::find()
            .filter(positions::Column::SentinelRole.eq(SentinelRole::UnemployedPosition.marker()))
            .one(&self.txn)
            .await
            .context("find unemployed position")?;
        Ok(model.map(position_from_model))
    }

    async fn insert_unemployed_position(
        &self,
        position: &Position,
    ) -> Result<(), StaffServiceError> {
        positions::Entity::insert(position_active_model(position))
            .on_conflict(
                OnConflict::column(positions::Column::SentinelRole)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.txn)
            .await
            .map_err(db_err("insert unemployed position"))?;
        Ok(())
    }

    async fn reassign_department_employees(
        &self,
        from: DepartmentId,
        department: DepartmentId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError> {
        let result = employees::Entity::update_many()
            .col_expr(employees::Column::DepartmentId, Expr::value(department.0))
            .col_expr(employees::Column::PositionId, Expr::value(position.0))
            .filter(employees::Column::DepartmentId.eq(from.0))
            .exec(&self.txn)
            .await
            .map_err(db_err("reassign department employees"))?;
        Ok(result.rows_affected)
    }

    async fn reassign_department_equipment(
        &self,
        from: DepartmentId,
        department: DepartmentId,
    ) -> Result<u64, StaffServiceError> {
        let result = equipment::Entity::update_many()
            .col_expr(equipment::Column::DepartmentId, Expr::value(department.0))
            .filter(equipment::Column::DepartmentId.eq(from.0))
            .exec(&self.txn)
            .await
            .map_err(db_err("reassign department equipment"))?;
        Ok(result.rows_affected)
    }

    async fn unlink_department(
        &self,
        department: DepartmentId,
    ) -> Result<u64, StaffServiceError> {
        let result = department_positions::Entity::delete_many()
            .filter(department_positions::Column::DepartmentId.eq(department.0))
            .exec(&self.txn)
            .await
            .map_err(db_err("unlink department positions"))?;
        Ok(result.rows_affected)
    }

    async fn delete_department(&self, id: DepartmentId) -> Result<(), StaffServiceError> {
        let result = departments::Entity::delete_by_id(id.0)
            .exec(&self.txn)
            .await
            .map_err(db_err("delete department"))?;
        if result.rows_affected == 0 {
            return Err(StaffServiceError::DepartmentNotFound);
        }
        Ok(())
    }

    async fn reassign_position_employees(
        &self,
        from: PositionId,
        position: PositionId,
    ) -> Result<u64, StaffServiceError> {
        let result = employees::Entity::update_many()
            .col_expr(employees::Column::PositionId, Expr::value(position.0))
            .filter(employees::Column::PositionId.eq(from.0))
            .exec(&self.txn)
            .await
            .map_err(db_err("reassign position employees"))?;
        Ok(result.rows_affected)
    }

    async fn unlink_position(&self, position: PositionId) -> Result<u64, StaffServiceError> {
        let result = department_positions::Entity::delete_many()
            .filter(department_positions::Column::PositionId.eq(position.0))
            .exec(&self.txn)
            .await
            .map_err(db_err("unlink position departments"))?;
        Ok(result.rows_affected)
    }

    async fn delete_position(&self, id: PositionId) -> Result<(), StaffServiceError> {
        let result = positions::Entity::delete_by_id(id.0)
            .exec(&self.txn)
            .await
            .map_err(db_err("delete position"))?;
        if result.rows_affected == 0 {
            return Err(StaffServiceError::PositionNotFound);
        }
        Ok(())
    }

    async fn commit(self) -> Result<(), StaffServiceError> {
        self.txn.commit().await.map_err(db_err("commit transaction"))
    }
}
