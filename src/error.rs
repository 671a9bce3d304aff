//! Setup failures
//!
//! The simulation itself cannot fail once running. Everything that can go
//! wrong happens before the first tick and stops the engine from starting.

use thiserror::Error;

use crate::sim::BallType;

#[derive(Debug, Error)]
pub enum SetupError {
    /// A tuning value is out of its usable range
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    /// The appearance resolver could not produce a handle for a ball
    #[error("could not create visual for {ball:?}: {reason}")]
    Visual { ball: BallType, reason: String },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),
}

impl SetupError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field,
            reason: reason.into(),
        }
    }
}
