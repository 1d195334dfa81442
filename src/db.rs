use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{catalog::Catalog, config::Config, error::CatalogResult};

/// Opens the pooled connection. Every catalog call borrows from this pool and
/// gives up after `acquire_timeout`.
///
/// SQLite connections opened through sqlx enforce foreign keys by default.
pub async fn connect(config: &Config) -> CatalogResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    Ok(Database::connect(opts).await?)
}

pub async fn open(config: &Config) -> CatalogResult<Catalog> {
    let db = connect(config).await?;
    Ok(Catalog::new(db, config.delete_policy))
}

/// Applies pending migrations over the direct (non-pooled) endpoint.
pub async fn migrate(direct_url: &str) -> CatalogResult<()> {
    let mut opts = ConnectOptions::new(direct_url.to_string());
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await?;
    Migrator::up(&db, None).await?;
    info!("catalog schema up to date");
    db.close().await?;
    Ok(())
}
