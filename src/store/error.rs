use thiserror::Error;

/// Failure raised by a mutator. The store keeps its previous slice.
#[derive(Debug, Error)]
pub enum MutatorError {
    #[error("action requires a payload")]
    MissingPayload,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("{0}")]
    Rejected(String),
}

/// Errors returned from [`Store::dispatch`](crate::store::Store::dispatch).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mutator '{action}' on slice '{slice}' failed: {source}")]
    Mutator {
        slice: String,
        action: String,
        #[source]
        source: MutatorError,
    },
}
