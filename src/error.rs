// src/error.rs
//! Typed failures for the model-facing operations. Filesystem and CSV
//! errors stay on `anyhow` with context, matching the rest of the crate.

use thiserror::Error;

/// Failure talking to the completion service.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion response carried no choices")]
    EmptyResponse,
}

/// Failure extracting structured jobs from model output.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The model answered, but the answer was not usable JSON. Not retried
    /// at this level; the caller's retry loop counts it as one attempt.
    #[error("unable to parse jobs from model output ({0}); context too big or malformed")]
    Parse(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
