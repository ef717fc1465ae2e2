use serde::Deserialize;
use thiserror::Error;

/// One field-level validation failure from the API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// Normalized failure of an API call.
///
/// Callers decide what a failure means: the session guard demotes on
/// [`ApiError::is_auth_error`] and shrugs at everything else, mutation
/// handlers surface the message to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },

    /// The response arrived but its body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True for authentication-class failures (401/403), the only errors
    /// that should ever sign a user out.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation errors, empty for non-HTTP failures.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Http { errors, .. } => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: "nope".to_string(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn only_401_and_403_are_auth_errors() {
        assert!(http(401).is_auth_error());
        assert!(http(403).is_auth_error());
        assert!(!http(400).is_auth_error());
        assert!(!http(404).is_auth_error());
        assert!(!http(500).is_auth_error());
        assert!(!ApiError::Network("offline".to_string()).is_auth_error());
        assert!(!ApiError::Decode("bad json".to_string()).is_auth_error());
    }

    #[test]
    fn display_uses_the_server_message() {
        let err = ApiError::Http {
            status: 422,
            message: "Title is required".to_string(),
            errors: vec![FieldError {
                field: "title".to_string(),
                message: "Title is required".to_string(),
                value: None,
            }],
        };
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.status(), Some(422));
    }
}
