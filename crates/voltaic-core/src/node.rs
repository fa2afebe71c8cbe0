//! Node identifiers and the name-to-id registry.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Unique identifier for a node in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The ground node (node 0, the 0V reference).
    pub const GROUND: NodeId = NodeId(0);

    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw node ID value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Check if this is the ground node.
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }

    /// MNA matrix row/column for this node. Ground has no row and
    /// maps to `None`; node k maps to `Some(k - 1)`.
    pub fn matrix_index(self) -> Option<usize> {
        if self.is_ground() {
            None
        } else {
            Some((self.0 - 1) as usize)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// True for the reserved ground spellings: `"0"` and any ASCII-case
/// variant of `"gnd"`.
fn is_ground_alias(name: &str) -> bool {
    name == "0" || name.eq_ignore_ascii_case("gnd")
}

/// Maps user-facing node names to dense integer identifiers.
///
/// Ids are assigned in first-seen order starting at 1; id 0 is
/// reserved for ground and seeded at construction. The registry is
/// append-only: names are never removed or renumbered for the
/// lifetime of a circuit, so iteration order is stable.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    ids: IndexMap<String, NodeId>,
    next_id: u32,
}

impl NodeRegistry {
    /// Create a registry with the ground aliases pre-registered.
    pub fn new() -> Self {
        let mut registry = Self {
            ids: IndexMap::new(),
            next_id: 1,
        };
        registry.seed_ground();
        registry
    }

    fn seed_ground(&mut self) {
        self.ids.insert("GND".to_string(), NodeId::GROUND);
        self.ids.insert("0".to_string(), NodeId::GROUND);
    }

    /// Get the id for `name`, assigning the next unused positive id
    /// if the name has not been seen before. Ground aliases resolve
    /// to [`NodeId::GROUND`] without consuming an id.
    pub fn resolve(&mut self, name: &str) -> Result<NodeId> {
        if name.is_empty() {
            return Err(Error::EmptyNodeName);
        }
        if is_ground_alias(name) {
            return Ok(NodeId::GROUND);
        }
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a name without creating it.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        if is_ground_alias(name) {
            return Some(NodeId::GROUND);
        }
        self.ids.get(name).copied()
    }

    /// The first name registered for `id`. Ground reports its
    /// canonical `"GND"` spelling.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.ids
            .iter()
            .find(|&(_, &v)| v == id)
            .map(|(name, _)| name.as_str())
    }

    /// Number of non-ground nodes registered.
    pub fn node_count(&self) -> usize {
        (self.next_id - 1) as usize
    }

    /// Iterate over (name, id) pairs in insertion order, ground
    /// aliases included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.ids.iter().map(|(name, &id)| (name.as_str(), id))
    }

    /// Discard every mapping and re-seed ground.
    pub fn reset(&mut self) {
        self.ids.clear();
        self.next_id = 1;
        self.seed_ground();
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
