//! Interactive menu for the Voltaic DC circuit solver.

mod output;
mod viz;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use voltaic_core::Circuit;

#[derive(Parser)]
#[command(
    name = "voltaic",
    about = "DC resistive circuit solver (Modified Nodal Analysis)"
)]
struct Cli {
    /// Netlist file to preload; the circuit is solved immediately.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut circuit = Circuit::new();

    if let Some(path) = &cli.load {
        load_netlist(&mut circuit, path);
    }

    run_menu(&mut circuit)
}

fn print_menu() {
    println!();
    println!("========================================");
    println!("   VOLTAIC CIRCUIT SOLVER (MNA)         ");
    println!("========================================");
    println!("1. Add Resistor");
    println!("2. Add Current Source");
    println!("3. Add Voltage Source");
    println!("4. Solve Circuit");
    println!("5. Save Circuit");
    println!("6. Load Circuit (Auto-Solves)");
    println!("7. Clear Circuit");
    println!("8. Visualize Circuit (Text Graph)");
    println!("9. Export Graphviz");
    println!("0. Exit");
    println!("========================================");
}

fn run_menu(circuit: &mut Circuit) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Enter choice: ")? else {
            return Ok(()); // EOF
        };

        match choice.as_str() {
            "1" => add_component(circuit, ComponentKind::Resistor)?,
            "2" => add_component(circuit, ComponentKind::CurrentSource)?,
            "3" => add_component(circuit, ComponentKind::VoltageSource)?,
            "4" => solve_and_report(circuit),
            "5" => {
                if let Some(path) = prompt("Enter filename to save: ")? {
                    match voltaic_netlist::save(&path, circuit) {
                        Ok(()) => println!("Circuit saved to {path}"),
                        Err(e) => println!("[save error]: {e}"),
                    }
                }
            }
            "6" => {
                if let Some(path) = prompt("Enter filename to load: ")? {
                    load_netlist(circuit, Path::new(&path));
                }
            }
            "7" => {
                circuit.clear();
                println!("Circuit cleared.");
            }
            "8" => print!("{}", viz::render_topology(circuit)),
            "9" => print!("{}", viz::render_graphviz(circuit)),
            "0" => {
                println!("Exiting.");
                return Ok(());
            }
            other => println!("Invalid choice '{other}'. Try again."),
        }
    }
}

enum ComponentKind {
    Resistor,
    CurrentSource,
    VoltageSource,
}

fn add_component(circuit: &mut Circuit, kind: ComponentKind) -> Result<()> {
    let prompts = match kind {
        ComponentKind::Resistor => ("R1", "Node A", "Node B", "Resistance (Ohms)"),
        ComponentKind::CurrentSource => ("I1", "Node From", "Node To", "Current (Amps)"),
        ComponentKind::VoltageSource => ("V1", "Positive Node", "Negative Node", "Voltage (Volts)"),
    };

    let Some(name) = prompt(&format!("Enter Name (e.g., {}): ", prompts.0))? else {
        return Ok(());
    };
    let Some(n1) = prompt(&format!("Enter {}: ", prompts.1))? else {
        return Ok(());
    };
    let Some(n2) = prompt(&format!("Enter {}: ", prompts.2))? else {
        return Ok(());
    };
    let Some(value) = prompt_value(&format!("Enter {}: ", prompts.3))? else {
        return Ok(());
    };

    let added = match kind {
        ComponentKind::Resistor => circuit.add_resistor(&name, &n1, &n2, value),
        ComponentKind::CurrentSource => circuit.add_current_source(&name, &n1, &n2, value),
        ComponentKind::VoltageSource => circuit.add_voltage_source(&name, &n1, &n2, value),
    };

    match added {
        Ok(()) => println!("{name} added."),
        Err(e) => println!("[error]: {e}"),
    }
    Ok(())
}

fn solve_and_report(circuit: &mut Circuit) {
    match circuit.solve() {
        Ok(()) => {
            println!("Circuit solved successfully.");
            print!("{}", output::format_results(circuit));
        }
        // Solver failures are reported, never fatal: the previous
        // state stays available for correction and retry.
        Err(e) => println!("[solver error]: {e}"),
    }
}

fn load_netlist(circuit: &mut Circuit, path: &Path) {
    match voltaic_netlist::load(path, circuit) {
        Ok(summary) => {
            println!("Loaded {} components.", summary.loaded);
            for (lineno, reason) in &summary.skipped {
                println!("Warning: skipped line {lineno}: {reason}");
            }
            println!("Auto-solving loaded circuit...");
            solve_and_report(circuit);
        }
        Err(e) => println!("[load error]: {e}"),
    }
}

/// Prompt for one trimmed line. Returns `None` on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the input parses as a number. Returns `None` on EOF.
fn prompt_value(label: &str) -> Result<Option<f64>> {
    loop {
        let Some(text) = prompt(label)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}
