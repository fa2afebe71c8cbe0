//! Circuit components: resistors, current sources, voltage sources.

use crate::error::{Error, Result};
use crate::node::NodeId;

/// A validated circuit element connecting two nodes.
///
/// Components are constructed through the checked constructors and are
/// immutable afterwards. Names are free-form and need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Resistor with resistance in ohms (always > 0).
    Resistor {
        name: String,
        node_a: NodeId,
        node_b: NodeId,
        ohms: f64,
    },
    /// Independent current source; positive current flows from
    /// `node_from` to `node_to`. Negative values reverse direction.
    CurrentSource {
        name: String,
        node_from: NodeId,
        node_to: NodeId,
        amps: f64,
    },
    /// Independent voltage source; negative values reverse polarity.
    VoltageSource {
        name: String,
        node_pos: NodeId,
        node_neg: NodeId,
        volts: f64,
    },
}

impl Component {
    /// Create a resistor. Fails if the resistance is not positive or
    /// both terminals land on the same node.
    pub fn resistor(
        name: impl Into<String>,
        node_a: NodeId,
        node_b: NodeId,
        ohms: f64,
    ) -> Result<Self> {
        let name = name.into();
        if ohms <= 0.0 {
            return Err(Error::NonPositiveResistance { name, ohms });
        }
        if node_a == node_b {
            return Err(Error::SelfLoop(name));
        }
        Ok(Component::Resistor {
            name,
            node_a,
            node_b,
            ohms,
        })
    }

    /// Create a current source. Fails on a self-loop.
    pub fn current_source(
        name: impl Into<String>,
        node_from: NodeId,
        node_to: NodeId,
        amps: f64,
    ) -> Result<Self> {
        let name = name.into();
        if node_from == node_to {
            return Err(Error::SelfLoop(name));
        }
        Ok(Component::CurrentSource {
            name,
            node_from,
            node_to,
            amps,
        })
    }

    /// Create a voltage source. Fails on a self-loop.
    pub fn voltage_source(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        volts: f64,
    ) -> Result<Self> {
        let name = name.into();
        if node_pos == node_neg {
            return Err(Error::SelfLoop(name));
        }
        Ok(Component::VoltageSource {
            name,
            node_pos,
            node_neg,
            volts,
        })
    }

    /// The component's name.
    pub fn name(&self) -> &str {
        match self {
            Component::Resistor { name, .. }
            | Component::CurrentSource { name, .. }
            | Component::VoltageSource { name, .. } => name,
        }
    }

    /// The two terminals, in declaration order (A/B, from/to, +/-).
    pub fn nodes(&self) -> (NodeId, NodeId) {
        match *self {
            Component::Resistor { node_a, node_b, .. } => (node_a, node_b),
            Component::CurrentSource {
                node_from, node_to, ..
            } => (node_from, node_to),
            Component::VoltageSource {
                node_pos, node_neg, ..
            } => (node_pos, node_neg),
        }
    }

    /// The component value: ohms, amperes or volts.
    pub fn value(&self) -> f64 {
        match *self {
            Component::Resistor { ohms, .. } => ohms,
            Component::CurrentSource { amps, .. } => amps,
            Component::VoltageSource { volts, .. } => volts,
        }
    }

    /// Whether either terminal connects to `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        let (a, b) = self.nodes();
        a == node || b == node
    }
}
