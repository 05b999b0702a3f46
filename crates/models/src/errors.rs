use sea_orm::DbErr;
use thiserror::Error;

/// Any failure of the persistence layer. Deliberately not decomposed further.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StorageError(pub String);

impl From<DbErr> for StorageError {
    fn from(e: DbErr) -> Self {
        StorageError(e.to_string())
    }
}
