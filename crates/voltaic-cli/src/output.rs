//! Result table formatting.

use std::cmp::Ordering;

use voltaic_core::Circuit;

/// Display-only node ordering: names that parse as integers sort
/// numerically and before symbolic names ("2" before "10" before
/// "vout"). Storage order stays insertion order; this comparator is
/// applied only when rendering for humans.
pub fn display_node_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Render the solved node voltages as a table, one node per line.
pub fn format_results(circuit: &Circuit) -> String {
    if !circuit.has_solution() {
        return "No results available. Solve the circuit first.\n".to_string();
    }

    let mut nodes: Vec<(&str, _)> = circuit
        .nodes()
        .iter()
        .filter(|(_, id)| !id.is_ground())
        .collect();
    nodes.sort_by(|(a, _), (b, _)| display_node_order(a, b));

    let mut out = String::from("--- Simulation Results ---\n");
    for (name, id) in nodes {
        if let Some(voltage) = circuit.voltage(id) {
            out.push_str(&format!("Node [{name}]: {voltage:.3} V\n"));
        }
    }
    out.push_str("--------------------------\n");
    out
}
