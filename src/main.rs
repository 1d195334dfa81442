use movie_catalog::{config::Config, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movie_catalog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    db::migrate(&config.direct_url).await?;

    let catalog = db::open(&config).await?;
    let stats = catalog.stats().await?;

    tracing::info!(
        movies = stats.movies,
        reviews = stats.reviews,
        workers = stats.workers,
        crew_members = stats.crew_members,
        delete_policy = %config.delete_policy,
        "catalog ready"
    );

    Ok(())
}
