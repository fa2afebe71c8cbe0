//! End-to-end tests: load a netlist, solve, verify node voltages.

use voltaic_core::Circuit;
use voltaic_netlist::{load, load_str, save};

#[test]
fn test_load_and_solve_voltage_divider() {
    let netlist = "\
V V1 A GND 10
R R1 A B 10
R R2 B GND 10
";
    let mut circuit = Circuit::new();
    let summary = load_str(netlist, &mut circuit).expect("load should succeed");
    assert_eq!(summary.loaded, 3);

    circuit.solve().expect("solve should succeed");

    let a = circuit.node_id("A").unwrap();
    let b = circuit.node_id("B").unwrap();
    let va = circuit.voltage(a).unwrap();
    let vb = circuit.voltage(b).unwrap();

    assert!((va - 10.0).abs() < 1e-6, "V(A) = {va} (expected 10)");
    assert!((vb - 5.0).abs() < 1e-6, "V(B) = {vb} (expected 5)");
}

#[test]
fn test_load_and_solve_current_injection() {
    // 2A into node A through a 5 ohm resistor: V(A) = 10V.
    let netlist = "\
I I1 GND A 2
R R1 A GND 5
";
    let mut circuit = Circuit::new();
    load_str(netlist, &mut circuit).expect("load should succeed");
    circuit.solve().expect("solve should succeed");

    let a = circuit.node_id("A").unwrap();
    let va = circuit.voltage(a).unwrap();
    assert!((va - 10.0).abs() < 1e-6, "V(A) = {va} (expected 10)");
}

#[test]
fn test_mixed_ground_spellings_in_one_file() {
    // 0, GND and gnd must all denote the same reference node.
    let netlist = "\
V V1 A 0 9
R R1 A B 100
R R2 B GND 100
R R3 B gnd 100
";
    let mut circuit = Circuit::new();
    load_str(netlist, &mut circuit).expect("load should succeed");
    circuit.solve().expect("solve should succeed");

    // R2 parallel R3 = 50 ohms; V(B) = 9 * 50 / 150 = 3V.
    let b = circuit.node_id("B").unwrap();
    let vb = circuit.voltage(b).unwrap();
    assert!((vb - 3.0).abs() < 1e-6, "V(B) = {vb} (expected 3)");
}

#[test]
fn test_save_load_solve_round_trip() {
    let mut circuit = Circuit::new();
    circuit.add_voltage_source("V1", "vin", "GND", 12.0).unwrap();
    circuit.add_resistor("R1", "vin", "vout", 1000.0).unwrap();
    circuit.add_resistor("R2", "vout", "GND", 2000.0).unwrap();

    let path = std::env::temp_dir().join("voltaic_round_trip_test.net");
    save(&path, &circuit).expect("save should succeed");

    let mut reloaded = Circuit::new();
    load(&path, &mut reloaded).expect("load should succeed");
    std::fs::remove_file(&path).ok();

    reloaded.solve().expect("solve should succeed");

    let vout = reloaded.node_id("vout").unwrap();
    let v = reloaded.voltage(vout).unwrap();
    assert!((v - 8.0).abs() < 1e-6, "V(vout) = {v} (expected 8)");
}
