//! Error types for calcpad-solver

use thiserror::Error;

/// Problem solving errors
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Problem text is empty")]
    EmptyProblem,

    #[error("No API key configured (set solver.api_key or API_KEY)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Solver returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Solver returned no text")]
    EmptyResponse,

    #[error("Malformed solution: {0}")]
    MalformedSolution(#[from] serde_json::Error),
}

impl SolverError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
