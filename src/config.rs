use std::{fmt, str::FromStr, time::Duration};

use anyhow::Context;

/// What deleting a movie or worker does to the rows that reference it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DeletePolicy {
    /// Refuse with `HasDependents` while child rows exist.
    #[default]
    Restrict,
    /// Remove child rows and the parent in a single transaction.
    Cascade,
}

impl FromStr for DeletePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restrict" => Ok(Self::Restrict),
            "cascade" => Ok(Self::Cascade),
            other => anyhow::bail!("unknown delete policy {other:?}, expected restrict or cascade"),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Restrict => f.write_str("restrict"),
            Self::Cascade => f.write_str("cascade"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Pooled endpoint used for catalog operations.
    pub database_url: String,
    /// Direct endpoint used for migrations.
    pub direct_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub delete_policy: DeletePolicy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movie_catalog.db?mode=rwc".to_string());

        let direct_url = std::env::var("DIRECT_URL").unwrap_or_else(|_| database_url.clone());

        let max_connections: u32 =
            std::env::var("DB_MAX_CONNECTIONS").ok().and_then(|s| s.parse().ok()).unwrap_or(10);

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8);

        let delete_policy = match std::env::var("CATALOG_DELETE_POLICY") {
            Ok(s) => s.parse().context("CATALOG_DELETE_POLICY")?,
            Err(_) => DeletePolicy::default(),
        };

        Ok(Self {
            database_url,
            direct_url,
            max_connections: max_connections.max(1),
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            delete_policy,
        })
    }

    /// Config for a single URL serving both roles, with default pool settings.
    pub fn for_url(url: impl Into<String>, delete_policy: DeletePolicy) -> Self {
        let url = url.into();
        Self {
            database_url: url.clone(),
            direct_url: url,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(8),
            delete_policy,
        }
    }
}
