//! Modified Nodal Analysis (MNA) system assembly.

use nalgebra::{DMatrix, DVector};

use crate::component::Component;
use crate::error::{Error, Result};
use crate::node::NodeId;

/// MNA system: Ax = b.
///
/// The unknowns in `x` are the non-ground node voltages followed by
/// one branch current per voltage source. Ground contributes no row
/// or column; node k occupies row k - 1.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    num_nodes: usize,
    num_vsources: usize,
}

impl MnaSystem {
    /// Create a zeroed system for `num_nodes` non-ground nodes and
    /// `num_vsources` voltage sources.
    pub fn new(num_nodes: usize, num_vsources: usize) -> Self {
        let size = num_nodes + num_vsources;
        Self {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
            num_nodes,
            num_vsources,
        }
    }

    /// Build the system for a component list.
    ///
    /// Fails with [`Error::EmptyCircuit`] when no non-ground node has
    /// been registered, and with [`Error::NoGroundReference`] when no
    /// component touches ground (the voltages of an ungrounded
    /// network are only defined up to an additive constant).
    pub fn assemble(num_nodes: usize, components: &[Component]) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::EmptyCircuit);
        }
        if !components.iter().any(|c| c.touches(NodeId::GROUND)) {
            return Err(Error::NoGroundReference);
        }

        let num_vsources = components
            .iter()
            .filter(|c| matches!(c, Component::VoltageSource { .. }))
            .count();

        let mut mna = MnaSystem::new(num_nodes, num_vsources);
        log::debug!(
            "assembling MNA system ({size}x{size})",
            size = mna.size()
        );

        let mut vsource_index = 0;
        for component in components {
            match *component {
                Component::Resistor {
                    node_a,
                    node_b,
                    ohms,
                    ..
                } => {
                    mna.stamp_conductance(
                        node_a.matrix_index(),
                        node_b.matrix_index(),
                        1.0 / ohms,
                    );
                }
                Component::CurrentSource {
                    node_from,
                    node_to,
                    amps,
                    ..
                } => {
                    mna.stamp_current_source(
                        node_from.matrix_index(),
                        node_to.matrix_index(),
                        amps,
                    );
                }
                Component::VoltageSource {
                    node_pos,
                    node_neg,
                    volts,
                    ..
                } => {
                    mna.stamp_voltage_source(
                        node_pos.matrix_index(),
                        node_neg.matrix_index(),
                        vsource_index,
                        volts,
                    );
                    vsource_index += 1;
                }
            }
        }

        Ok(mna)
    }

    /// Total size of the system (nodes + branch currents).
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_vsources
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of voltage sources (branch current unknowns).
    pub fn num_vsources(&self) -> usize {
        self.num_vsources
    }

    /// Stamp a conductance between two nodes (`None` = ground).
    ///
    /// For a conductance g between nodes i and j:
    /// A[i,i] += g, A[j,j] += g, A[i,j] -= g, A[j,i] -= g.
    pub fn stamp_conductance(&mut self, node_i: Option<usize>, node_j: Option<usize>, g: f64) {
        if let Some(i) = node_i {
            self.matrix[(i, i)] += g;
        }
        if let Some(j) = node_j {
            self.matrix[(j, j)] += g;
        }
        if let (Some(i), Some(j)) = (node_i, node_j) {
            self.matrix[(i, j)] -= g;
            self.matrix[(j, i)] -= g;
        }
    }

    /// Stamp a current source driving `current` amperes from node i
    /// to node j (`None` = ground).
    pub fn stamp_current_source(
        &mut self,
        node_i: Option<usize>,
        node_j: Option<usize>,
        current: f64,
    ) {
        if let Some(i) = node_i {
            self.rhs[i] -= current;
        }
        if let Some(j) = node_j {
            self.rhs[j] += current;
        }
    }

    /// Stamp voltage source number `vsource_idx` between a positive
    /// and a negative node (`None` = ground). The ±1 couplings are
    /// assignments: each source owns its auxiliary row and column.
    pub fn stamp_voltage_source(
        &mut self,
        node_pos: Option<usize>,
        node_neg: Option<usize>,
        vsource_idx: usize,
        voltage: f64,
    ) {
        let row = self.num_nodes + vsource_idx;

        if let Some(i) = node_pos {
            self.matrix[(i, row)] = 1.0;
            self.matrix[(row, i)] = 1.0;
        }
        if let Some(j) = node_neg {
            self.matrix[(j, row)] = -1.0;
            self.matrix[(row, j)] = -1.0;
        }

        self.rhs[row] = voltage;
    }

    /// Borrow the coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Borrow the right-hand side.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Consume the system, yielding the matrix/vector pair as owned
    /// working storage for a solve.
    pub fn into_parts(self) -> (DMatrix<f64>, DVector<f64>) {
        (self.matrix, self.rhs)
    }
}
