use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("load failure: {0}")]
    Load(String),
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },
    #[error("column name collision: {name}")]
    NameCollision { name: String },
}

pub type Result<T> = std::result::Result<T, CleanError>;
