//! Golden snapshot tests for AST tree dumps
//!
//! These tests parse `.lit` input files and compare the indented tree dump
//! against stored snapshots. This ensures parser changes are reviewed and
//! intentional.
//!
//! Run with: `cargo test --test ast_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use tanglaw::{FrontendConfig, analyze};

/// Parse TanglawPL source and render its tree, failing on any diagnostic
fn tree_dump(name: &str, source: &str) -> String {
    let analysis = analyze(name, source, &FrontendConfig::default());
    let rendered: Vec<String> = analysis.diagnostics().iter().map(|d| d.render()).collect();
    assert!(rendered.is_empty(), "{name} has diagnostics:\n{}", rendered.join("\n"));
    analysis.program.expect("program").to_string()
}

/// Load a test file from the ast_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("{}/tests/ast_snapshots/{}.lit", env!("CARGO_MANIFEST_DIR"), name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_declarations_ast() {
    let tree = tree_dump("declarations.lit", &load_test_file("declarations"));
    insta::assert_snapshot!("declarations", tree);
}

#[test]
fn test_control_flow_ast() {
    let tree = tree_dump("control_flow.lit", &load_test_file("control_flow"));
    insta::assert_snapshot!("control_flow", tree);
}

#[test]
fn test_loops_ast() {
    let tree = tree_dump("loops.lit", &load_test_file("loops"));
    insta::assert_snapshot!("loops", tree);
}

#[test]
fn test_geometry_ast() {
    let tree = tree_dump("geometry.lit", &load_test_file("geometry"));
    insta::assert_snapshot!("geometry", tree);
}

#[test]
fn test_expressions_ast() {
    let tree = tree_dump("expressions.lit", &load_test_file("expressions"));
    insta::assert_snapshot!("expressions", tree);
}
