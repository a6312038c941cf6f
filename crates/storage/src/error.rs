use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ReferenceNotFound(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("Unsupported database URL: {0}")]
    UnsupportedDatabase(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    /// Replaces a unique-constraint failure with a `DuplicateKey` carrying `message`.
    /// Every other error passes through unchanged.
    pub fn on_unique_violation(self, message: impl FnOnce() -> String) -> Self {
        if self.is_unique_violation() {
            StorageError::DuplicateKey(message())
        } else {
            self
        }
    }
}
