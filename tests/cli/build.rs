use crate::cli::support::{arbo, write_graph, ASYMMETRIC_YAML, DISCONNECTED_YAML, PATH_YAML};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Build command tests
// ============================================================================

#[test]
fn test_build_default_graph_default_start() {
    arbo()
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum spanning tree from A:"))
        .stdout(predicate::str::contains("Total cost: 7"));
}

#[test]
fn test_build_prints_step_trace() {
    arbo()
        .args(["build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1:"))
        .stdout(predicate::str::contains("step 4:"))
        .stdout(predicate::str::contains("edge: A -- B (weight 2)"))
        .stdout(predicate::str::contains("in tree: A, B"))
        .stdout(predicate::str::contains("running cost: 7"));
}

#[test]
fn test_build_no_trace() {
    arbo()
        .args(["build", "A", "--no-trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1:").not())
        .stdout(predicate::str::contains("Total cost: 7"));
}

#[test]
fn test_build_from_other_start() {
    arbo()
        .args(["build", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum spanning tree from E:"))
        .stdout(predicate::str::contains("Total cost: 7"));
}

#[test]
fn test_build_json_format() {
    let output = arbo()
        .args(["--format", "json", "build", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "A");
    assert_eq!(json["complete"], true);
    assert_eq!(json["total_cost"], 7.0);

    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["from"], "A");
    assert_eq!(edges[0]["to"], "B");
    assert_eq!(edges[1]["from"], "B");
    assert_eq!(edges[1]["to"], "C");
    assert_eq!(edges[2]["to"], "D");
    assert_eq!(edges[3]["to"], "E");

    let trace = json["trace"].as_array().unwrap();
    assert_eq!(trace.len(), 4);
    assert_eq!(trace[0]["step"], 1);
    assert_eq!(trace[0]["visited"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_build_json_no_trace_omits_trace() {
    let output = arbo()
        .args(["--format", "json", "build", "A", "--no-trace"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("trace").is_none());
    assert_eq!(json["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_build_records_format() {
    arbo()
        .args(["--format", "records", "build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H arbo=1 records=1 mode=build start=A complete=true total_cost=7 edges=4",
        ))
        .stdout(predicate::str::contains("S 1 A B 2 cost=2 visited=A,B"))
        .stdout(predicate::str::contains("E D E 1"));
}

#[test]
fn test_build_invalid_start() {
    arbo()
        .args(["build", "Z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("start vertex not found: Z"));
}

#[test]
fn test_build_invalid_start_json_envelope() {
    arbo()
        .args(["--format", "json", "build", "Z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"start_not_found\""));
}

// ============================================================================
// Graph file loading
// ============================================================================

#[test]
fn test_build_from_yaml_graph_file() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.yaml", PATH_YAML);

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 3"));
}

#[test]
fn test_build_from_json_graph_file() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "g.json",
        r#"{"A": {"B": 1}, "B": {"A": 1, "C": 2}, "C": {"B": 2}}"#,
    );

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 3"));
}

#[test]
fn test_build_from_toml_graph_file() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "g.toml",
        "[A]\nB = 1.0\n\n[B]\nA = 1.0\nC = 2.0\n\n[C]\nB = 2.0\n",
    );

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 3"));
}

#[test]
fn test_build_disconnected_graph_is_partial() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.yaml", DISCONNECTED_YAML);

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 1"))
        .stdout(predicate::str::contains(
            "[partial: graph is not connected from A]",
        ));
}

#[test]
fn test_build_disconnected_json_reports_incomplete() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.yaml", DISCONNECTED_YAML);

    let output = arbo()
        .args([
            "--graph",
            path.to_str().unwrap(),
            "--format",
            "json",
            "build",
            "A",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["complete"], false);
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
}

#[test]
fn test_build_missing_graph_file() {
    arbo()
        .args(["--graph", "/nonexistent/g.yaml", "build"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_build_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.txt", "A: {}\n");

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension"));
}

#[test]
fn test_build_asymmetric_graph_file_rejected() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.yaml", ASYMMETRIC_YAML);

    arbo()
        .args(["--graph", path.to_str().unwrap(), "build"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("asymmetric adjacency"));
}
