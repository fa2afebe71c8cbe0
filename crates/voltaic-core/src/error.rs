//! Error types for voltaic-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("node name cannot be empty")]
    EmptyNodeName,

    #[error("component '{0}' cannot connect both terminals to the same node")]
    SelfLoop(String),

    #[error("resistor '{name}' must have positive resistance, got {ohms}")]
    NonPositiveResistance { name: String, ohms: f64 },

    #[error("circuit is empty; add components first")]
    EmptyCircuit,

    #[error("no component is connected to ground; node voltages are undefined")]
    NoGroundReference,

    #[error(transparent)]
    Solver(#[from] voltaic_solver::Error),
}

impl Error {
    /// True for errors raised while validating a component definition,
    /// as opposed to failures of the solve itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyNodeName | Error::SelfLoop(_) | Error::NonPositiveResistance { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
