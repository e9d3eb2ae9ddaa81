//! Errors from create/update/delete flows

/// Error returned by an [`EntityStore`](crate::mutation::EntityStore).
///
/// The store is the remote mutation layer; this type only carries what it
/// reported so the caller can decide how to surface it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The record does not exist (anymore).
    #[error("Record '{id}' not found")]
    NotFound { id: String },

    /// The service rejected the payload, with per-field messages.
    #[error("Rejected by server: {}", join_errors(.0))]
    Rejected(Vec<super::FieldValidationError>),

    /// Transport or server failure.
    #[error("Request failed: {0}")]
    Request(String),
}

/// Error type for a mutation flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MutationError {
    /// A mutation of the same kind is still in flight.
    #[error("A {operation} is already in progress")]
    Pending { operation: &'static str },

    /// The form did not pass client-side validation.
    #[error(transparent)]
    Invalid(#[from] super::ValidationError),

    /// The store reported a failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_errors(errors: &[super::FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
