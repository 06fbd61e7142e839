use sea_orm::entity::prelude::*;

/// Organisational unit. The Reserve department carries
/// `sentinel_role = "reserve"`; every other row leaves it NULL.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub sentinel_role: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employees::Entity")]
    Employees,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
    #[sea_orm(has_many = "super::department_positions::Entity")]
    DepartmentPositions,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::department_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentPositions.def()
    }
}

impl Related<super::positions::Entity> for Entity {
    fn to() -> RelationDef {
        super::department_positions::Relation::Position.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::department_positions::Relation::Department.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
