use thiserror::Error;

/// Reasons a draft is refused by the validation gate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Price must be a positive number.")]
    InvalidPrice,
    #[error("Stock must be a positive integer.")]
    InvalidStock,
    #[error("Product name must be unique.")]
    DuplicateName,
}

impl ValidationError {
    /// Form field the message belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired | ValidationError::DuplicateName => "name",
            ValidationError::InvalidPrice => "price",
            ValidationError::InvalidStock => "stock",
        }
    }
}

/// Errors returned by the catalog service and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Draft rejected: {0}")]
    Rejected(#[from] ValidationError),
    #[error("No product form is open")]
    NoActiveForm,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeedError {
    #[error("Malformed product records: {0}")]
    Malformed(String),
    #[error("Duplicate product id: {0}")]
    DuplicateId(u64),
    #[error("Duplicate product name: {0}")]
    DuplicateName(String),
}
