//! Migrate command - Applies or inspects the favorites schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are driven explicitly below
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Pending migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Last migration rolled back");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            let pending = pending_count(&status);

            for (name, applied) in &status {
                tracing::info!(migration = %name, applied = *applied, "Migration status");
            }
            tracing::info!(total = status.len(), pending, "Schema status checked");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-applying migrations");
            db.fresh_migrations().await?;
            tracing::info!("Schema recreated");
        }
    }

    Ok(())
}

/// Number of migrations not yet applied
fn pending_count(status: &[(String, bool)]) -> usize {
    status.iter().filter(|(_, applied)| !applied).count()
}
