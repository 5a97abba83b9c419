use thiserror::Error;

/// Failures reading or writing the persisted collection.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("stored value under \"{key}\" is not a valid resource list: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode resources: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a form draft cannot become a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Unit is required")]
    MissingUnit,

    #[error("Quantity must be a number")]
    InvalidQuantity,
}

/// An enum value that is not one of the known variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
