use thiserror::Error;

/// Failures of the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// A key is absent or its value cannot be decoded. Readers recover with a
    /// default; it never reaches the user.
    #[error("no usable data under `{key}`")]
    MissingData { key: String },
}

impl StoreError {
    pub fn missing(key: &str) -> Self {
        StoreError::MissingData {
            key: key.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
