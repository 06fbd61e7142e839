use sea_orm_migration::prelude::*;

mod m20250401_000001_create_departments;
mod m20250401_000002_create_positions;
mod m20250401_000003_create_specializations;
mod m20250401_000004_create_equipment_categories;
mod m20250401_000005_create_employees;
mod m20250401_000006_create_equipment;
mod m20250401_000007_create_department_positions;
mod m20250401_000008_establish_sentinels;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_departments::Migration),
            Box::new(m20250401_000002_create_positions::Migration),
            Box::new(m20250401_000003_create_specializations::Migration),
            Box::new(m20250401_000004_create_equipment_categories::Migration),
            Box::new(m20250401_000005_create_employees::Migration),
            Box::new(m20250401_000006_create_equipment::Migration),
            Box::new(m20250401_000007_create_department_positions::Migration),
            Box::new(m20250401_000008_establish_sentinels::Migration),
        ]
    }
}
