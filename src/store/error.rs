use thiserror::Error;

/// Failures reported by store operations. None of them leave the store
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u64,
        available: u64,
    },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("{0} already exists")]
    Conflict(String),
}

impl StoreError {
    pub fn vegetable_not_found(id: &str) -> Self {
        StoreError::NotFound(format!("Vegetable {id}"))
    }

    pub fn customer_not_found(id: &str) -> Self {
        StoreError::NotFound(format!("Customer {id}"))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
