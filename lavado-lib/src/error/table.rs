//! TableError for column set construction

/// Error type for building a table's column set.
///
/// Runtime references to unknown columns (filters, sorts, visibility) are
/// never errors; they are ignored. Only a malformed column set is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns share the same id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A column was declared with an empty id.
    #[error("Column id must not be empty")]
    EmptyColumnId,
}

impl TableError {
    /// Creates a new duplicate column error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }
}
