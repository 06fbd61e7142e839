use serde::Deserialize;

/// Staff service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct StaffConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `STAFF_PORT`.
    #[serde(default = "default_staff_port")]
    pub staff_port: u16,
    /// Apply pending migrations before serving. Env var: `STAFF_RUN_MIGRATIONS`.
    #[serde(default)]
    pub staff_run_migrations: bool,
}

fn default_staff_port() -> u16 {
    3120
}

impl roster_core::config::Config for StaffConfig {}
