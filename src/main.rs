//! Tareas HTTP server entry point.
//!
//! Reads configuration from the environment, installs logging, selects the
//! task repository, and serves the API until shut down.

use std::sync::Arc;

use diesel::r2d2::ConnectionManager;
use mockable::DefaultClock;
use tareas::{
    api::{self, AppState},
    config::Config,
    task::{
        adapters::{
            memory::InMemoryTaskRepository,
            postgres::{PostgresTaskRepository, TaskPgPool},
        },
        ports::TaskRepository,
        services::TaskService,
        validation::TaskValidator,
    },
    telemetry,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;
    telemetry::init(config.log_format)?;

    let repository = build_repository(&config).await?;
    let service = TaskService::new(repository, Arc::new(DefaultClock))
        .with_validator(TaskValidator::with_config(config.validation.clone()));

    api::serve(&config, AppState::new(service)).await?;
    Ok(())
}

async fn build_repository(config: &Config) -> eyre::Result<Arc<dyn TaskRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL is not set, tasks are kept in memory and lost on exit");
        return Ok(Arc::new(InMemoryTaskRepository::new()));
    };

    let pool = TaskPgPool::builder()
        .max_size(config.db_pool_size)
        .build(ConnectionManager::new(database_url))?;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    info!(pool_size = config.db_pool_size, "using PostgreSQL task storage");
    Ok(Arc::new(repository))
}
