//! Error taxonomy for a fetch cycle.

use thiserror::Error;

use crate::fault::SimulatedFault;
use crate::schema::ValidationError;

/// Transport-level failure reported by an [`HttpClient`](super::HttpClient).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Host unreachable, TLS failure, connection reset...
    #[error("connection to '{url}' failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Connect or whole-request budget expired, whichever fired.
    #[error("request to '{url}' timed out after {millis}ms")]
    Timeout { url: String, millis: u64 },

    /// Server answered with a non-2xx status.
    #[error("'{url}' responded with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Body was received but is not JSON.
    #[error("response from '{url}' is not valid JSON: {reason}")]
    Decode { url: String, reason: String },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    NetworkFailure,
    ValidationFailure,
    SimulatedFault,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::NetworkFailure => "network_failure",
            FetchErrorKind::ValidationFailure => "validation_failure",
            FetchErrorKind::SimulatedFault => "simulated_fault",
        }
    }
}

/// Error recorded in [`FetchState::Error`](super::FetchState::Error).
///
/// The presentation layer treats every kind the same way; the distinction
/// is kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error(transparent)]
    Validation(ValidationError),

    #[error(transparent)]
    Simulated(SimulatedFault),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::NetworkFailure,
            FetchError::Validation(_) => FetchErrorKind::ValidationFailure,
            FetchError::Simulated(_) => FetchErrorKind::SimulatedFault,
        }
    }

    /// Field diagnostics, when the payload failed validation.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            FetchError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for FetchError {
    fn from(err: TransportError) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<ValidationError> for FetchError {
    fn from(err: ValidationError) -> Self {
        FetchError::Validation(err)
    }
}

impl From<SimulatedFault> for FetchError {
    fn from(fault: SimulatedFault) -> Self {
        FetchError::Simulated(fault)
    }
}
