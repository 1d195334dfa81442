pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod ingest;
pub mod models;

pub use catalog::Catalog;
pub use config::{Config, DeletePolicy};
pub use error::{CatalogError, CatalogResult};
