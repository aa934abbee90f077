//! calcpad-solver - Natural-language problem solving via a remote model
//!
//! Text in, structured solution or failure out. The calculator engine never
//! depends on this crate; front ends call it side by side with the engine.
//!
//! # Example
//!
//! ```rust,no_run
//! use calcpad_solver::{GeminiSolver, ProblemSolver, SolverConfig};
//!
//! # async fn run() -> calcpad_solver::Result<()> {
//! let config = SolverConfig {
//!     api_key: Some("...".to_string()),
//!     ..SolverConfig::default()
//! };
//! let solver = GeminiSolver::new(config)?;
//! let solution = solver.solve("A train travels 120 km in 1.5 hours. Average speed?").await?;
//! println!("{}", solution.final_result);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

pub mod config;
pub mod error;
pub mod gemini;
pub mod solution;

// Re-exports for convenience
pub use config::SolverConfig;
pub use error::{Result, SolverError};
pub use gemini::GeminiSolver;
pub use solution::AiSolution;

/// Problem solver trait
///
/// Implementations send one request per call and do not retry.
pub trait ProblemSolver: Send + Sync {
    /// Solve a natural-language problem
    fn solve(&self, problem: &str) -> impl Future<Output = Result<AiSolution>> + Send;
}
