use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DepartmentPositions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DepartmentPositions::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentPositions::PositionId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DepartmentPositions::DepartmentId)
                            .col(DepartmentPositions::PositionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_positions_department_id")
                            .from(DepartmentPositions::Table, DepartmentPositions::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_department_positions_position_id")
                            .from(DepartmentPositions::Table, DepartmentPositions::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        // The primary key already covers lookups by department.
        manager
            .create_index(
                Index::create()
                    .table(DepartmentPositions::Table)
                    .col(DepartmentPositions::PositionId)
                    .name("idx_department_positions_position_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartmentPositions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DepartmentPositions {
    Table,
    DepartmentId,
    PositionId,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}

#[derive(Iden)]
enum Positions {
    Table,
    Id,
}
