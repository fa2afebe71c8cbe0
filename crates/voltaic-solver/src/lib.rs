//! Dense linear solver for Voltaic.
//!
//! This crate provides Gaussian elimination with partial pivoting over
//! `nalgebra` dense matrices. It is a pure matrix/vector routine with
//! no knowledge of circuits, so it can be tested and reused on its
//! own.

pub mod error;
pub mod linear;

pub use error::{Error, Result};
pub use linear::{SolverConfig, solve};
