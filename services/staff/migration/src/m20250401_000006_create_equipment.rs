use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Equipment::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Equipment::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Equipment::DepartmentId).uuid().null())
                    .col(ColumnDef::new(Equipment::CategoryId).uuid().not_null())
                    .col(
                        ColumnDef::new(Equipment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_department_id")
                            .from(Equipment::Table, Equipment::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_category_id")
                            .from(Equipment::Table, Equipment::CategoryId)
                            .to(EquipmentCategories::Table, EquipmentCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Equipment::Table)
                    .col(Equipment::DepartmentId)
                    .name("idx_equipment_department_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
    Name,
    DepartmentId,
    CategoryId,
    CreatedAt,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}

#[derive(Iden)]
enum EquipmentCategories {
    Table,
    Id,
}
