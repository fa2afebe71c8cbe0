//! Circuit visualization: console topology view and Graphviz export.
//!
//! Pure string renderers over the core's read accessors; no numerical
//! work happens here.

use std::collections::HashSet;

use voltaic_core::{Circuit, Component, NodeId};

fn node_label(circuit: &Circuit, id: NodeId) -> String {
    circuit
        .nodes()
        .name_of(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}

/// Edge decoration seen from `from`'s side of the component.
fn edge_arrow(component: &Component, outgoing: bool) -> &'static str {
    match (component, outgoing) {
        (Component::Resistor { .. }, _) => " --- ",
        (Component::CurrentSource { .. }, true) => " --> ",
        (Component::CurrentSource { .. }, false) => " <-- ",
        (Component::VoltageSource { .. }, true) => " (+)- ",
        (Component::VoltageSource { .. }, false) => " -(-) ",
    }
}

/// Render the circuit as an adjacency listing, one block per node.
pub fn render_topology(circuit: &Circuit) -> String {
    let mut out = String::from("====== CIRCUIT GRAPH TOPOLOGY (Adjacency List) ======\n");

    // The registry holds both ground aliases; show each node once.
    let mut seen: HashSet<NodeId> = HashSet::new();
    for (name, id) in circuit.nodes().iter() {
        if !seen.insert(id) {
            continue;
        }
        out.push_str(&format!(" Node [{name}] connects to:\n"));

        let mut connected = false;
        for component in circuit.components() {
            let (a, b) = component.nodes();
            let neighbor = if a == id {
                Some((b, true))
            } else if b == id {
                Some((a, false))
            } else {
                None
            };

            if let Some((neighbor, outgoing)) = neighbor {
                connected = true;
                out.push_str(&format!(
                    "   |-- [{} ({})]{}Node [{}]\n",
                    component.name(),
                    component.value(),
                    edge_arrow(component, outgoing),
                    node_label(circuit, neighbor),
                ));
            }
        }

        if !connected {
            out.push_str("   (No connections - Isolated)\n");
        }
        out.push('\n');
    }

    out.push_str("=====================================================\n");
    out
}

/// Render the circuit as a Graphviz `graph` document.
pub fn render_graphviz(circuit: &Circuit) -> String {
    let mut out = String::from("graph Circuit {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for component in circuit.components() {
        let (a, b) = component.nodes();
        let unit = match component {
            Component::Resistor { .. } => "Ohm",
            Component::CurrentSource { .. } => "A",
            Component::VoltageSource { .. } => "V",
        };
        out.push_str(&format!(
            "  \"{}\" -- \"{}\" [label=\"{}\\n{} {}\"];\n",
            node_label(circuit, a),
            node_label(circuit, b),
            component.name(),
            component.value(),
            unit,
        ));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider() -> Circuit {
        let mut circuit = Circuit::new();
        circuit.add_voltage_source("V1", "A", "GND", 10.0).unwrap();
        circuit.add_resistor("R1", "A", "B", 10.0).unwrap();
        circuit.add_resistor("R2", "B", "GND", 10.0).unwrap();
        circuit
    }

    #[test]
    fn test_topology_lists_connections() {
        let text = render_topology(&divider());

        assert!(text.contains(" Node [A] connects to:"));
        assert!(text.contains("[R1 (10)] --- Node [B]"));
        assert!(text.contains("[V1 (10)] (+)- Node [GND]"));
        // Each node appears once even though ground has two aliases.
        assert_eq!(text.matches("connects to:").count(), 3);
    }

    #[test]
    fn test_topology_flags_isolated_node() {
        let mut circuit = divider();
        circuit.resolve_node("orphan").unwrap();

        let text = render_topology(&circuit);
        assert!(text.contains(" Node [orphan] connects to:"));
        assert!(text.contains("(No connections - Isolated)"));
    }

    #[test]
    fn test_graphviz_edges() {
        let dot = render_graphviz(&divider());

        assert!(dot.starts_with("graph Circuit {"));
        assert!(dot.contains("\"A\" -- \"GND\" [label=\"V1\\n10 V\"];"));
        assert!(dot.contains("\"A\" -- \"B\" [label=\"R1\\n10 Ohm\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
