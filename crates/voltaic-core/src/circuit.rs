//! The circuit facade: component insertion, solving, and results.

use indexmap::IndexMap;
use voltaic_solver::SolverConfig;

use crate::component::Component;
use crate::error::Result;
use crate::mna::MnaSystem;
use crate::node::{NodeId, NodeRegistry};

/// A resistive DC circuit with its solved node voltages.
///
/// Components reference nodes by name; names are resolved to dense
/// ids through the internal [`NodeRegistry`] as a side effect of
/// insertion. Solving re-derives the MNA system from the component
/// list every time, so circuits can be freely mutated and re-solved.
#[derive(Debug)]
pub struct Circuit {
    nodes: NodeRegistry,
    components: Vec<Component>,
    voltages: IndexMap<NodeId, f64>,
    branch_currents: Vec<f64>,
    solver: SolverConfig,
}

impl Circuit {
    /// Create an empty circuit with the default solver configuration.
    pub fn new() -> Self {
        Self::with_solver_config(SolverConfig::default())
    }

    /// Create an empty circuit with an explicit solver configuration.
    pub fn with_solver_config(solver: SolverConfig) -> Self {
        let mut voltages = IndexMap::new();
        voltages.insert(NodeId::GROUND, 0.0);
        Self {
            nodes: NodeRegistry::new(),
            components: Vec::new(),
            voltages,
            branch_currents: Vec::new(),
            solver,
        }
    }

    /// Add a resistor between the named nodes.
    ///
    /// Node names are resolved (and created if new) before
    /// validation, so a rejected component may still have registered
    /// its nodes; the component list itself is never left partially
    /// updated.
    pub fn add_resistor(
        &mut self,
        name: impl Into<String>,
        node_a: &str,
        node_b: &str,
        ohms: f64,
    ) -> Result<()> {
        let a = self.nodes.resolve(node_a)?;
        let b = self.nodes.resolve(node_b)?;
        let component = Component::resistor(name, a, b, ohms)?;
        self.components.push(component);
        Ok(())
    }

    /// Add a current source driving `amps` from `node_from` to
    /// `node_to`.
    pub fn add_current_source(
        &mut self,
        name: impl Into<String>,
        node_from: &str,
        node_to: &str,
        amps: f64,
    ) -> Result<()> {
        let from = self.nodes.resolve(node_from)?;
        let to = self.nodes.resolve(node_to)?;
        let component = Component::current_source(name, from, to, amps)?;
        self.components.push(component);
        Ok(())
    }

    /// Add a voltage source with `node_pos` as its positive terminal.
    pub fn add_voltage_source(
        &mut self,
        name: impl Into<String>,
        node_pos: &str,
        node_neg: &str,
        volts: f64,
    ) -> Result<()> {
        let pos = self.nodes.resolve(node_pos)?;
        let neg = self.nodes.resolve(node_neg)?;
        let component = Component::voltage_source(name, pos, neg, volts)?;
        self.components.push(component);
        Ok(())
    }

    /// Resolve a node name to its id, creating the node if new.
    pub fn resolve_node(&mut self, name: &str) -> Result<NodeId> {
        self.nodes.resolve(name)
    }

    /// Look up a node name without creating it.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.lookup(name)
    }

    /// The node registry, for read-only iteration by display and
    /// export collaborators.
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// The components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of non-ground nodes registered.
    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    /// Number of voltage sources.
    pub fn vsource_count(&self) -> usize {
        self.components
            .iter()
            .filter(|c| matches!(c, Component::VoltageSource { .. }))
            .count()
    }

    /// Assemble the MNA system for the current component list.
    pub fn assemble_mna(&self) -> Result<MnaSystem> {
        MnaSystem::assemble(self.node_count(), &self.components)
    }

    /// Solve for the node voltages.
    ///
    /// Rebuilds the MNA system from scratch and runs Gaussian
    /// elimination; calling it twice without mutating the circuit
    /// yields identical results. On failure the voltages from the
    /// last successful solve are left in place (inherited behavior,
    /// kept deliberately); use [`Circuit::has_solution`] if freshness
    /// matters.
    pub fn solve(&mut self) -> Result<()> {
        let mna = self.assemble_mna()?;
        let num_nodes = mna.num_nodes();
        let (a, b) = mna.into_parts();
        let x = voltaic_solver::solve(a, b, &self.solver)?;

        for i in 0..num_nodes {
            self.voltages.insert(NodeId::new(i as u32 + 1), x[i]);
        }
        self.branch_currents = x.iter().skip(num_nodes).copied().collect();
        log::debug!("solved {num_nodes} node voltages");
        Ok(())
    }

    /// The voltage at a node, or `None` if the node has not been
    /// solved for. Ground is always `Some(0.0)`.
    pub fn voltage(&self, node: NodeId) -> Option<f64> {
        self.voltages.get(&node).copied()
    }

    /// Whether at least one solve has succeeded since the last clear.
    pub fn has_solution(&self) -> bool {
        self.voltages.len() > 1
    }

    /// Branch current through voltage source `index` (in order of
    /// insertion among voltage sources), from the last successful
    /// solve. Positive current flows into the positive terminal.
    pub fn branch_current(&self, index: usize) -> Option<f64> {
        self.branch_currents.get(index).copied()
    }

    /// Discard all components, nodes and results, re-seeding ground.
    pub fn clear(&mut self) {
        self.components.clear();
        self.nodes.reset();
        self.voltages.clear();
        self.voltages.insert(NodeId::GROUND, 0.0);
        self.branch_currents.clear();
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
