use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use roster_core::config::Config as _;
use roster_staff::config::StaffConfig;
use roster_staff::router::build_router;
use roster_staff::state::AppState;
use roster_staff::usecase::sentinel::EnsureSentinelsUseCase;
use roster_staff_migration::Migrator;

/// Used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "staff=info,roster_staff=info,roster_core=info,tower_http=info,warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster_core::tracing::init_tracing(DEFAULT_LOG_FILTER);

    let config = StaffConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.staff_run_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let state = AppState { db };

    let sentinels = EnsureSentinelsUseCase {
        store: state.staff_store(),
    }
    .execute()
    .await
    .context("failed to resolve sentinel rows")?;
    info!(
        reserve_department_id = %sentinels.reserve_department_id,
        unemployed_position_id = %sentinels.unemployed_position_id,
        "sentinels ready"
    );

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.staff_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("staff service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
