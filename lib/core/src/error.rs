use crate::item::Field;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no valid records in catalog input ({dropped} dropped as incomplete)")]
    EmptyCatalog { dropped: usize },

    #[error("duplicate item names in catalog: {}", .0.join(", "))]
    DuplicateNames(Vec<String>),

    #[error("item not found: {0}")]
    NotFound(String),

    #[error("item not indexed: {0}")]
    NotIndexed(String),

    #[error("requested {requested} neighbors, only {available} available")]
    InsufficientData { requested: usize, available: usize },

    #[error("neighbor count must be positive")]
    InvalidK,

    #[error("value {value:?} for field {field} is missing from the vocabulary")]
    UnknownValue { field: Field, value: String },
}
