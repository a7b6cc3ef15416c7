//! Error types for the activity directory and server bootstrap.

use axum::http::StatusCode;
use thiserror::Error;

/// A rejected signup or unregister command.
///
/// The display string is what the caller sees in the `detail` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },

    /// Only raised when capacity enforcement is switched on.
    #[error("Activity is full")]
    ActivityFull { activity: String },

    #[error("email is required")]
    MissingEmail,
}

impl ActivityError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp { .. } | Self::NotSignedUp { .. } | Self::ActivityFull { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Invalid server configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActivityError::NotFound {
            activity: "Knitting".to_string(),
        };
        assert!(err.to_string().contains("not found"));

        let err = ActivityError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "a@mergington.edu".to_string(),
        };
        assert!(err.to_string().contains("already signed up"));

        let err = ActivityError::NotSignedUp {
            activity: "Chess Club".to_string(),
            email: "a@mergington.edu".to_string(),
        };
        assert!(err.to_string().contains("not signed up"));
    }

    #[test]
    fn test_error_status() {
        let not_found = ActivityError::NotFound {
            activity: "x".to_string(),
        };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let full = ActivityError::ActivityFull {
            activity: "x".to_string(),
        };
        assert_eq!(full.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ActivityError::MissingEmail.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "PORT",
            value: "eighty".to_string(),
            reason: "not a port number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PORT"));
        assert!(msg.contains("eighty"));
    }
}
