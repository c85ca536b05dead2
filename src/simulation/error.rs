//! Error types for the simulation engine.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies occupy the same position, so the inverse-cube term is undefined
    #[error("degenerate geometry: bodies {a} and {b} share the same position")]
    DegenerateGeometry { a: usize, b: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Explicit Euler blew up; position or velocity of `body` is NaN/Inf
    #[error("non-finite state for body {body} after step {step}")]
    NonFiniteState { step: usize, body: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
