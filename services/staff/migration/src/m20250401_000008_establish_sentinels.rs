use roster_domain::sentinel::SentinelRole;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;
use uuid::Uuid;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Where each sentinel lives and which column holds its display name.
struct SentinelTable {
    table: &'static str,
    name_column: &'static str,
    role: SentinelRole,
}

const SENTINEL_TABLES: [SentinelTable; 2] = [
    SentinelTable {
        table: "departments",
        name_column: "name",
        role: SentinelRole::ReserveDepartment,
    },
    SentinelTable {
        table: "positions",
        name_column: "title",
        role: SentinelRole::UnemployedPosition,
    },
];

fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl SentinelTable {
    /// Rename rows that still carry a historical spelling.
    fn normalize_names(&self) -> String {
        let historical = self
            .role
            .historical_names()
            .iter()
            .map(|name| literal(name))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {table} SET {col} = {canonical} WHERE {col} IN ({historical})",
            table = self.table,
            col = self.name_column,
            canonical = literal(self.role.canonical_name()),
        )
    }

    /// Mark the oldest canonically named row, unless a marked row exists.
    fn mark_oldest(&self) -> String {
        format!(
            "UPDATE {table} SET sentinel_role = {marker} \
             WHERE id = (SELECT id FROM {table} WHERE {col} = {canonical} \
                         ORDER BY created_at, id LIMIT 1) \
             AND NOT EXISTS (SELECT 1 FROM {table} WHERE sentinel_role = {marker})",
            table = self.table,
            col = self.name_column,
            canonical = literal(self.role.canonical_name()),
            marker = literal(self.role.marker()),
        )
    }

    /// Create the sentinel row on an empty database.
    fn seed(&self) -> String {
        format!(
            "INSERT INTO {table} (id, {col}, sentinel_role) VALUES ({id}, {canonical}, {marker}) \
             ON CONFLICT (sentinel_role) DO NOTHING",
            table = self.table,
            col = self.name_column,
            id = literal(&Uuid::now_v7().to_string()),
            canonical = literal(self.role.canonical_name()),
            marker = literal(self.role.marker()),
        )
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sentinel in &SENTINEL_TABLES {
            db.execute_unprepared(&sentinel.normalize_names()).await?;
            db.execute_unprepared(&sentinel.mark_oldest()).await?;
            db.execute_unprepared(&sentinel.seed()).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sentinel in &SENTINEL_TABLES {
            db.execute_unprepared(&format!(
                "UPDATE {} SET sentinel_role = NULL",
                sentinel.table
            ))
            .await?;
        }
        Ok(())
    }
}
