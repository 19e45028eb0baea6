#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_with_config;
use configs::DatabaseConfig;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Live-database tests only run when `DATABASE_URL` is set and `SKIP_DB_TESTS` is not.
pub fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_env();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&test_config()).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    connect_with_config(&test_config()).await
}
