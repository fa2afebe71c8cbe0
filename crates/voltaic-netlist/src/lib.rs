//! Text netlist load/save for Voltaic.
//!
//! One component per line, whitespace-separated:
//!
//! ```text
//! TYPE NAME NODE1 NODE2 VALUE
//! ```
//!
//! with `TYPE` one of `R`, `I`, `V` (case-insensitive) and the node
//! fields holding node *names* (`0`/`GND`/`gnd` denote ground). Blank
//! lines are ignored; malformed lines are skipped with a warning and
//! reported in the returned [`LoadSummary`]. A line that fails the
//! core's component validation aborts the load and leaves the circuit
//! cleared.

pub mod error;

use std::fs;
use std::path::Path;

use voltaic_core::{Circuit, Component};

pub use error::{Error, Result};

/// Outcome of a successful load.
#[derive(Debug, Default)]
pub struct LoadSummary {
    /// Number of components added to the circuit.
    pub loaded: usize,
    /// Skipped lines as (1-based line number, reason) pairs.
    pub skipped: Vec<(usize, String)>,
}

/// Load a netlist file into `circuit`, replacing its contents.
pub fn load(path: impl AsRef<Path>, circuit: &mut Circuit) -> Result<LoadSummary> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| Error::FileIo {
        path: path.display().to_string(),
        source,
    })?;
    load_str(&input, circuit)
}

/// Load netlist records from a string into `circuit`, replacing its
/// contents.
pub fn load_str(input: &str, circuit: &mut Circuit) -> Result<LoadSummary> {
    circuit.clear();
    let mut summary = LoadSummary::default();

    for (index, line) in input.lines().enumerate() {
        let lineno = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[kind, name, node1, node2, value] = fields.as_slice() else {
            skip(&mut summary, lineno, line, "expected 5 fields");
            continue;
        };

        let value: f64 = match value.parse() {
            Ok(v) => v,
            Err(_) => {
                skip(&mut summary, lineno, line, "unparsable value");
                continue;
            }
        };

        let added = match kind {
            k if k.eq_ignore_ascii_case("R") => circuit.add_resistor(name, node1, node2, value),
            k if k.eq_ignore_ascii_case("I") => {
                circuit.add_current_source(name, node1, node2, value)
            }
            k if k.eq_ignore_ascii_case("V") => {
                circuit.add_voltage_source(name, node1, node2, value)
            }
            _ => {
                skip(&mut summary, lineno, line, "unknown component type");
                continue;
            }
        };

        if let Err(e) = added {
            // An invalid component definition means the file does not
            // describe a usable circuit; do not keep half of it.
            circuit.clear();
            return Err(e.into());
        }
        summary.loaded += 1;
    }

    Ok(summary)
}

fn skip(summary: &mut LoadSummary, lineno: usize, line: &str, reason: &str) {
    log::warn!("skipping malformed netlist line {lineno} ({reason}): {line}");
    summary.skipped.push((lineno, reason.to_string()));
}

/// Save `circuit` to a netlist file.
pub fn save(path: impl AsRef<Path>, circuit: &Circuit) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, save_string(circuit)).map_err(|source| Error::FileIo {
        path: path.display().to_string(),
        source,
    })
}

/// Render `circuit` as netlist records.
///
/// Nodes are written by name (ground as `GND`), so a save/load round
/// trip preserves the user-facing names.
pub fn save_string(circuit: &Circuit) -> String {
    let mut out = String::new();
    for component in circuit.components() {
        let kind = match component {
            Component::Resistor { .. } => 'R',
            Component::CurrentSource { .. } => 'I',
            Component::VoltageSource { .. } => 'V',
        };
        let (a, b) = component.nodes();
        let name_a = node_name(circuit, a);
        let name_b = node_name(circuit, b);
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            kind,
            component.name(),
            name_a,
            name_b,
            component.value()
        ));
    }
    out
}

fn node_name(circuit: &Circuit, id: voltaic_core::NodeId) -> String {
    circuit
        .nodes()
        .name_of(id)
        .map(str::to_string)
        .unwrap_or_else(|| id.to_string())
}
