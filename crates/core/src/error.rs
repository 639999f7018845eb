#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The operation exists on the entity's contract but has no implementation
    /// for this entity type. Permanent for that (entity, operation) pair.
    #[error("{operation} is not implemented for {entity}")]
    NotImplemented {
        entity: &'static str,
        operation: &'static str,
    },

    #[error("Value cannot be null: {0}")]
    NullArgument(&'static str),

    #[error("Cannot cast {found} to {expected}")]
    InvalidCast {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown entity kind: {0}")]
    UnknownEntity(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    pub fn not_implemented(entity: &'static str, operation: &'static str) -> Self {
        CoreError::NotImplemented { entity, operation }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
