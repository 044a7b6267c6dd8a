//! Error types for layout and animation construction.
//!
//! Every failure here is synchronous and surfaces at construction or call
//! time; a validly constructed transition cannot fail later (timers either
//! advance or are stopped), so there is no asynchronous failure channel.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LayoutError {
    /// A numeric argument outside its valid range (e.g. negative iteration
    /// count for a sampling table).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Mutually exclusive animation modes requested together.
    #[error("conflicting animation configuration: {reason}")]
    Configuration { reason: String },

    /// An animation config entry names a property kind the animator does not
    /// recognize.
    #[error("unrecognized animation type: {kind}")]
    UnrecognizedAnimationType { kind: String },

    /// Malformed configuration document.
    #[error("configuration parse error: {reason}")]
    Parse { reason: String },
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
