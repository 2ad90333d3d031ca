use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use todo_database::{SqliteTodoRepository, TodoRepository};
use todo_http::TodoApi;
use tracing::{info, warn};

use crate::config::Config;

/// Create a TODO repository based on the configuration
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTodoRepository>> {
    info!("Creating TODO repository");

    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteTodoRepository::new(&database_url)
        .await
        .context("Failed to create SQLite repository")?;

    info!("Running database migrations");
    repo.migrate()
        .await
        .context("Failed to run database migrations")?;

    // Surface store readiness at startup; the endpoint itself stays static
    match repo.health_check().await {
        Ok(()) => info!("Database health check passed"),
        Err(e) => warn!(error = %e, "Database health check failed at startup"),
    }

    info!("TODO repository created successfully");
    Ok(Arc::new(repo))
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<TodoApi<SqliteTodoRepository>> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    let server = TodoApi::new(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    let database_url = config.database_url();
    ensure_database_directory(&database_url)
}

/// Ensure the database directory exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
                info!("Created database directory: {}", parent.display());
            }
        }
    }

    Ok(())
}
