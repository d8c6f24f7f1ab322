//! End-to-end tests for the graph commands (load, path, mst, bench)

mod common;

use common::{trellis, write_graph, TRIANGLE, TWO_COMPONENTS};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

// ============================================================================
// load
// ============================================================================

#[test]
fn test_load_summarizes_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TRIANGLE);

    trellis()
        .arg("load")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes: 3"))
        .stdout(predicate::str::contains("edges: 3"))
        .stdout(predicate::str::contains("total weight: 15"));
}

#[test]
fn test_load_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TRIANGLE);

    let output = trellis()
        .args(["--format", "json", "load"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["nodes"], 3);
    assert_eq!(summary["edges"], 3);
    assert_eq!(summary["total_weight"], 15);
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_to_target() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    for strategy in ["scan", "heap"] {
        trellis()
            .args(["path", "--from", "a", "--to", "c", "--strategy", strategy])
            .arg(&graph)
            .assert()
            .success()
            .stdout(predicate::str::contains("a -> b -> c"))
            .stdout(predicate::str::contains("distance: 8"));
    }
}

#[test]
fn test_path_unreachable_target_is_not_an_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    trellis()
        .args(["path", "--from", "a", "--to", "d"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from a to d"));
}

#[test]
fn test_path_unknown_target_is_an_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    trellis()
        .args(["path", "--from", "a", "--to", "zz"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: zz"));
}

#[test]
fn test_path_lists_all_distances() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    trellis()
        .args(["path", "--from", "a"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("a: 0"))
        .stdout(predicate::str::contains("b: 5"))
        .stdout(predicate::str::contains("c: 8"))
        .stdout(predicate::str::contains("d: unreachable"))
        .stdout(predicate::str::contains("e: unreachable"));
}

#[test]
fn test_path_json_strategies_agree() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    let mut reports = Vec::new();
    for strategy in ["scan", "heap"] {
        let output = trellis()
            .args(["--format", "json", "path", "--from", "a", "--strategy", strategy])
            .arg(&graph)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let mut report: Value = serde_json::from_slice(&output).unwrap();
        // The strategy name differs by construction; everything else must not.
        report
            .as_object_mut()
            .unwrap()
            .remove("strategy")
            .unwrap();
        reports.push(report);
    }

    assert_eq!(reports[0], reports[1]);
    assert_eq!(reports[0]["unreachable"], serde_json::json!(["d", "e"]));
}

// ============================================================================
// mst
// ============================================================================

#[test]
fn test_mst_triangle() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TRIANGLE);

    trellis()
        .arg("mst")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("b -- c [weight=3]"))
        .stdout(predicate::str::contains("a -- b [weight=4]"))
        .stdout(predicate::str::contains("total weight: 7"))
        .stdout(predicate::str::contains("a -- c").not());
}

#[test]
fn test_mst_disconnected_reports_forest() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    let output = trellis()
        .args(["--format", "json", "mst"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["vertices"], 5);
    assert_eq!(report["spanning"], false);
    assert_eq!(report["edges"].as_array().unwrap().len(), 3);
    assert_eq!(report["total_weight"], 10);
}

// ============================================================================
// bench
// ============================================================================

#[test]
fn test_bench_reports_both_strategies() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TRIANGLE);

    trellis()
        .args(["bench", "--from", "a", "--iterations", "3"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("heap"))
        .stdout(predicate::str::contains("mean"));
}

#[test]
fn test_bench_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TWO_COMPONENTS);

    let output = trellis()
        .args(["--format", "json", "bench", "--from", "a", "--iterations", "2"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["agree"], true);
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
    assert_eq!(report["results"][0]["strategy"], "scan");
    assert_eq!(report["results"][1]["strategy"], "heap");
}

#[test]
fn test_bench_rejects_zero_iterations() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.gv", TRIANGLE);

    trellis()
        .args(["bench", "--from", "a", "--iterations", "0"])
        .arg(&graph)
        .assert()
        .code(2);
}
