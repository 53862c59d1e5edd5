use crate::cli::support::{arbo, write_graph, DISCONNECTED_YAML};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Export command tests
// ============================================================================

#[test]
fn test_export_highlights_tree() {
    let output = arbo().args(["export", "A"]).output().unwrap();
    assert!(output.status.success());

    let dot = String::from_utf8_lossy(&output.stdout);
    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("node [shape=circle];"));
    // 4 tree edges highlighted, 3 remaining edges gray
    assert_eq!(dot.matches("color=red").count(), 4);
    assert_eq!(dot.matches("color=lightgray").count(), 3);
    assert!(dot.contains("\"A\" -- \"B\" [label=\"2\", color=red, penwidth=3];"));
    assert!(dot.contains("\"B\" -- \"D\" [label=\"4\", color=lightgray, penwidth=2];"));
}

#[test]
fn test_export_plain_has_no_highlight() {
    let output = arbo().args(["export", "--plain"]).output().unwrap();
    assert!(output.status.success());

    let dot = String::from_utf8_lossy(&output.stdout);
    assert_eq!(dot.matches("color=red").count(), 0);
    assert_eq!(dot.matches(" -- ").count(), 7);
}

#[test]
fn test_export_to_file() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("tree.dot");

    arbo()
        .args(["export", "A", "-o", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote"));

    let dot = std::fs::read_to_string(&out_path).unwrap();
    assert!(dot.starts_with("graph {"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn test_export_quiet_suppresses_wrote_message() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("tree.dot");

    arbo()
        .args(["--quiet", "export", "A", "-o", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_export_disconnected_warns_and_highlights_partial() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "g.yaml", DISCONNECTED_YAML);

    let output = arbo()
        .args(["--graph", path.to_str().unwrap(), "export", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not connected from A"));

    let dot = String::from_utf8_lossy(&output.stdout);
    assert_eq!(dot.matches("color=red").count(), 1);
    assert!(dot.contains("\"C\";"));
}

#[test]
fn test_export_invalid_start() {
    arbo()
        .args(["export", "Z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("start vertex not found: Z"));
}
