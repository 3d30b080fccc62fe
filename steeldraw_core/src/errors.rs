//! # Error Types
//!
//! The workflow distinguishes two failure worlds:
//!
//! - [`ValidationError`] is local and synchronous. It blocks a submission at
//!   the boundary and never reaches the network.
//! - [`RequestError`] covers everything that can go wrong once a request has
//!   been issued. The orchestrator converts it into a user-facing notification;
//!   nothing here is fatal to the process.

use thiserror::Error;

/// A local validation failure naming the offending field or batch row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    /// Failure for one field of a single-mode dimension set.
    pub fn for_field(name: &str) -> Self {
        ValidationError {
            message: format!(
                "Please enter a valid positive number for {}",
                name.replace('_', " ")
            ),
        }
    }

    /// Failure for a batch row (1-based index, matching what the user sees).
    pub fn for_row(row: usize) -> Self {
        ValidationError {
            message: format!(
                "Please enter a valid positive number for all fields in Row {row}"
            ),
        }
    }
}

/// A request that could not be completed.
///
/// Display output is just the detail text; callers compose the surrounding
/// "Failed to generate ... DXF:" wording when building notifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The service rejected the request and said why (decoded `{"detail"}` body).
    #[error("{detail}")]
    Service { detail: String },

    /// The request never produced a usable response (network, client setup).
    #[error("{reason}")]
    Transport { reason: String },

    /// The response arrived but could not be decoded.
    #[error("{reason}")]
    Decode { reason: String },
}

impl RequestError {
    pub fn transport(reason: impl Into<String>) -> Self {
        RequestError::Transport {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        RequestError::Decode {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_message_uses_spaces() {
        let err = ValidationError::for_field("flange_width");
        assert_eq!(
            err.to_string(),
            "Please enter a valid positive number for flange width"
        );
    }

    #[test]
    fn test_row_message_is_one_based() {
        let err = ValidationError::for_row(2);
        assert_eq!(
            err.to_string(),
            "Please enter a valid positive number for all fields in Row 2"
        );
    }

    #[test]
    fn test_request_error_displays_detail_only() {
        let err = RequestError::Service {
            detail: "Web thickness exceeds flange width".to_string(),
        };
        assert_eq!(err.to_string(), "Web thickness exceeds flange width");
    }
}
