use sea_orm::entity::prelude::*;

/// Job title. The Unemployed position carries `sentinel_role = "unemployed"`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub sentinel_role: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employees::Entity")]
    Employees,
    #[sea_orm(has_many = "super::department_positions::Entity")]
    DepartmentPositions,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::department_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentPositions.def()
    }
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        super::department_positions::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::department_positions::Relation::Position.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
