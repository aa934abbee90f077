//! Error types for calcpad-engine
//!
//! Arithmetic never fails: division by zero and domain errors surface as
//! `NaN`/`Infinity` display values. These errors only cover turning raw
//! key text into typed input.

use thiserror::Error;

/// Input conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

impl CalcError {
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator(symbol.into())
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction(name.into())
    }

    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
