//! Circuit representation and MNA assembly for Voltaic.
//!
//! This crate holds the numerical core of the solver: the node
//! registry, the validated component model, the Modified Nodal
//! Analysis assembler, and the [`Circuit`] facade that ties them to
//! the linear solver. Persistence, visualization and the interactive
//! menu live in collaborator crates and only touch this one through
//! the accessors on [`Circuit`].

pub mod circuit;
pub mod component;
pub mod error;
pub mod mna;
pub mod node;

pub use circuit::Circuit;
pub use component::Component;
pub use error::{Error, Result};
pub use mna::MnaSystem;
pub use node::{NodeId, NodeRegistry};
pub use voltaic_solver::SolverConfig;
