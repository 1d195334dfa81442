use std::fmt::Display;

use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{entity} violates a unique key: {detail}")]
    DuplicateKey { entity: &'static str, detail: String },

    #[error("{entity} references a row that does not exist: {detail}")]
    ReferenceNotFound { entity: &'static str, detail: String },

    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} {key} still has dependent rows")]
    HasDependents { entity: &'static str, key: String },

    /// Pool timeout or connection failure; the operation may be retried.
    #[error("transient store failure: {0}")]
    Transient(#[source] DbErr),

    #[error(transparent)]
    Store(DbErr),
}

impl CatalogError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    pub(crate) fn not_found(entity: &'static str, key: impl Display) -> Self {
        Self::NotFound { entity, key: key.to_string() }
    }

    /// Classifies a failed INSERT or UPDATE.
    pub(crate) fn from_write(err: DbErr, entity: &'static str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::DuplicateKey { entity, detail }
            },
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ReferenceNotFound { entity, detail }
            },
            _ => err.into(),
        }
    }

    /// Classifies a failed DELETE. A foreign key violation here means a
    /// child row still points at the parent.
    pub(crate) fn from_delete(err: DbErr, entity: &'static str, key: impl Display) -> Self {
        let restricted = matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
            || is_sqlite_restrict(&err);
        if restricted { Self::HasDependents { entity, key: key.to_string() } } else { err.into() }
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        if is_transient(&err) { Self::Transient(err) } else { Self::Store(err) }
    }
}

fn is_transient(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Exec(_) | DbErr::Query(_) => {
            let msg = err.to_string();
            msg.contains("database is locked") || msg.contains("pool timed out")
        },
        _ => false,
    }
}

/// SQLite reports an `ON DELETE RESTRICT` rejection as SQLITE_CONSTRAINT_TRIGGER
/// (1811) rather than SQLITE_CONSTRAINT_FOREIGNKEY (787). User triggers share
/// that code, so the message is checked too.
fn is_sqlite_restrict(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.code().as_deref() == Some("1811")
                && e.message().contains("FOREIGN KEY constraint failed")
        },
        _ => false,
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
