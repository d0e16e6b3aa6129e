use crate::repository::RepositoryError;

/// Domain error for value objects, entities and use cases.
///
/// Every variant maps to a stable machine-readable code (see
/// [`CoreError::code`]) so adapters can pick a transport response without
/// parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    InvalidWidgetId(String),

    #[error("{0}")]
    InvalidContent(String),

    #[error("{0}")]
    InvalidWidgetType(String),

    /// Static/dynamic variant rules were violated.
    #[error("{0}")]
    InvalidDescriptor(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub const CODE_WIDGET_NOT_FOUND: &str = "WIDGET_NOT_FOUND";
pub const CODE_INVALID_WIDGET_ID: &str = "INVALID_WIDGET_ID";
pub const CODE_INVALID_CONTENT: &str = "INVALID_CONTENT";
pub const CODE_INVALID_WIDGET_TYPE: &str = "INVALID_WIDGET_TYPE";
pub const CODE_INVALID_DESCRIPTOR: &str = "INVALID_DESCRIPTOR";
pub const CODE_VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

impl CoreError {
    /// Machine-readable error code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => CODE_WIDGET_NOT_FOUND,
            CoreError::InvalidWidgetId(_) => CODE_INVALID_WIDGET_ID,
            CoreError::InvalidContent(_) => CODE_INVALID_CONTENT,
            CoreError::InvalidWidgetType(_) => CODE_INVALID_WIDGET_TYPE,
            CoreError::InvalidDescriptor(_) => CODE_INVALID_DESCRIPTOR,
            CoreError::Validation(_) => CODE_VALIDATION_ERROR,
            CoreError::Internal(_) => CODE_INTERNAL_ERROR,
        }
    }

    /// True for failures caused by caller input rather than the backend.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Internal(_))
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_variant() {
        let errors = [
            CoreError::NotFound {
                entity: "Widget",
                id: "x".into(),
            },
            CoreError::InvalidWidgetId("x".into()),
            CoreError::InvalidContent("x".into()),
            CoreError::InvalidWidgetType("x".into()),
            CoreError::InvalidDescriptor("x".into()),
            CoreError::Validation("x".into()),
            CoreError::Internal("x".into()),
        ];
        let mut codes: Vec<_> = errors.iter().map(CoreError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Widget",
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "Widget with id abc not found");
        assert_eq!(err.code(), CODE_WIDGET_NOT_FOUND);
    }

    #[test]
    fn repository_error_becomes_internal() {
        let err: CoreError = RepositoryError::Backend("connection reset".into()).into();
        assert_eq!(err.code(), CODE_INTERNAL_ERROR);
        assert!(!err.is_client_error());
    }
}
