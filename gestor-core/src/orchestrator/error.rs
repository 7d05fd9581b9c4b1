use thiserror::Error;

use crate::gateway::GatewayError;
use crate::models::{Action, EntityKind};

/// Failure of a single intent.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The mapped record broke one or more rules; nothing was persisted.
    #[error("{kind} failed validation: {}", .errors.join("; "))]
    Validation {
        kind: EntityKind,
        errors: Vec<String>,
    },

    /// The intent is missing something it needs before any work starts.
    #[error("{action} of {kind} requires an id")]
    Precondition { action: Action, kind: EntityKind },

    #[error(transparent)]
    Storage(#[from] GatewayError),
}

impl OrchestratorError {
    /// Validation messages, empty for other failures.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            OrchestratorError::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}
