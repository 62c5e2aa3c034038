//! CLI integration tests for orbit-map
//!
//! These tests run the binary against orbit map files written to temporary
//! directories and check both the text and JSON output.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = "COM)B
B)C
C)D
D)E
E)F
B)G
G)H
D)I
E)J
J)K
K)L
";

/// Get a command instance isolated from the user's configuration
fn orbit_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("orbit-map"));
    cmd.env_remove("ORBIT_MAP_CONFIG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

/// Write an orbit map into the directory and return its path
fn write_map(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, content).unwrap();
    path
}

fn travel_map() -> String {
    format!("{}K)YOU\nI)SAN\n", SAMPLE)
}

// =============================================================================
// Total Tests
// =============================================================================

#[test]
fn test_total_sample() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    orbit_cmd(&dir)
        .arg("total")
        .arg(&map)
        .assert()
        .success()
        .stdout("Total: 42\n");
}

#[test]
fn test_total_ignores_surrounding_whitespace() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, &format!("\n\n  {}  \n\n", SAMPLE.replace('\n', "  \n  ")));

    orbit_cmd(&dir)
        .arg("total")
        .arg(&map)
        .assert()
        .success()
        .stdout("Total: 42\n");
}

#[test]
fn test_total_json() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    let output = orbit_cmd(&dir)
        .args(["total", "--format", "json"])
        .arg(&map)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["total"], 42);
}

#[test]
fn test_total_requires_path() {
    let dir = TempDir::new().unwrap();

    orbit_cmd(&dir)
        .arg("total")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    orbit_cmd(&dir)
        .arg("total")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read orbit map"));
}

#[test]
fn test_malformed_record_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, "COM)B\nABC-DEF\n");

    orbit_cmd(&dir)
        .arg("total")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record at line 2"));
}

#[test]
fn test_duplicate_parent_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, "COM)A\nCOM)B\nA)X\nB)X\n");

    orbit_cmd(&dir)
        .arg("total")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("X orbits both A and B"));
}

#[test]
fn test_cycle_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, "A)B\nB)C\nC)A\n");

    orbit_cmd(&dir)
        .arg("total")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle detected"));
}

// =============================================================================
// Hops Tests
// =============================================================================

#[test]
fn test_hops_sample() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, &travel_map());

    orbit_cmd(&dir)
        .arg("hops")
        .arg(&map)
        .assert()
        .success()
        .stdout("Hops: 4\n");
}

#[test]
fn test_hops_explicit_bodies() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, &travel_map());

    orbit_cmd(&dir)
        .arg("hops")
        .arg(&map)
        .args(["--from", "SAN", "--to", "YOU"])
        .assert()
        .success()
        .stdout("Hops: 4\n");
}

#[test]
fn test_hops_json() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, &travel_map());

    let output = orbit_cmd(&dir)
        .args(["--format", "json", "hops"])
        .arg(&map)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["from"], "YOU");
    assert_eq!(json["to"], "SAN");
    assert_eq!(json["hops"], 4);
}

#[test]
fn test_hops_unknown_body_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    orbit_cmd(&dir)
        .arg("hops")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Body not found: YOU"));
}

#[test]
fn test_hops_disconnected_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, "COM)A\nA)YOU\nX)Y\nY)SAN\n");

    orbit_cmd(&dir)
        .arg("hops")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No common ancestor between YOU and SAN"));
}

#[test]
fn test_hops_verbose_reports_common_ancestor() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, &travel_map());

    orbit_cmd(&dir)
        .args(["--verbose", "hops"])
        .arg(&map)
        .assert()
        .success()
        .stdout("Hops: 4\n")
        .stderr(predicate::str::contains("Nearest common ancestor: D"))
        .stderr(predicate::str::contains("Root: COM"));
}

// =============================================================================
// Chain Tests
// =============================================================================

#[test]
fn test_chain_to_root() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    orbit_cmd(&dir)
        .arg("chain")
        .arg(&map)
        .arg("H")
        .assert()
        .success()
        .stdout("Chain: G -> B -> COM\n");
}

#[test]
fn test_chain_with_stop() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    orbit_cmd(&dir)
        .arg("chain")
        .arg(&map)
        .args(["L", "--stop", "E"])
        .assert()
        .success()
        .stdout("Chain: K -> J -> E\n");
}

#[test]
fn test_chain_of_root() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    orbit_cmd(&dir)
        .arg("chain")
        .arg(&map)
        .arg("COM")
        .assert()
        .success()
        .stdout("Chain: (root)\n");
}

#[test]
fn test_chain_json() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);

    let output = orbit_cmd(&dir)
        .args(["chain", "-f", "json"])
        .arg(&map)
        .arg("D")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["body"], "D");
    assert_eq!(json["stop"], serde_json::Value::Null);
    assert_eq!(json["chain"], serde_json::json!(["C", "B", "COM"]));
    assert_eq!(json["length"], 3);
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_sets_default_bodies() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);
    let config = dir.path().join("orbit.toml");
    fs::write(&config, "from = \"L\"\nto = \"H\"\n").unwrap();

    // From K (L's parent) to G (H's parent): K -> J -> E -> D -> C -> B -> G
    orbit_cmd(&dir)
        .arg("hops")
        .arg(&map)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("Hops: 6\n");
}

#[test]
fn test_config_sets_default_format() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);
    let config = dir.path().join("orbit.toml");
    fs::write(&config, "default_format = \"json\"\n").unwrap();

    orbit_cmd(&dir)
        .env("ORBIT_MAP_CONFIG", &config)
        .arg("total")
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":42"));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);
    let config = dir.path().join("orbit.toml");
    fs::write(&config, "default_format = \"json\"\n").unwrap();

    orbit_cmd(&dir)
        .arg("--config")
        .arg(&config)
        .args(["--format", "text", "total"])
        .arg(&map)
        .assert()
        .success()
        .stdout("Total: 42\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let map = write_map(&dir, SAMPLE);
    let config = dir.path().join("orbit.toml");
    fs::write(&config, "from = \"\"\n").unwrap();

    orbit_cmd(&dir)
        .arg("--config")
        .arg(&config)
        .arg("total")
        .arg(&map)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
