use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_build_produces_dot_and_json_outputs() {
    // Arrange: temp tree with a small include chain
    let dir = tempdir().unwrap();
    let root = dir.path();

    write_file(&root.join("main.cpp"), "#include \"a.h\"\nint main() {}\n");
    write_file(&root.join("a.h"), "#include \"b.h\"\n");
    write_file(&root.join("b.h"), "struct B {};\n");

    // Act: run build with dot and json outputs
    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build")
        .arg(root.join("main.cpp"))
        .arg("--no-render")
        .arg("--json")
        .arg(root.join("graph.json"))
        .arg("--dot")
        .arg(root.join("graph.dot"));
    cmd.assert().success();

    // Assert: outputs exist and are non-empty
    let json_path = root.join("graph.json");
    let dot_path = root.join("graph.dot");
    assert!(json_path.exists());
    assert!(dot_path.exists());
    assert!(fs::metadata(&json_path).unwrap().len() > 0);

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("digraph includes"));
    assert!(dot.contains("rankdir=BT")); // default: included files below includers
    assert!(dot.contains("label=\"main.cpp\""));
    assert!(dot.contains("label=\"b.h\""));
}

#[test]
fn cli_dot_flags_and_legend() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("main.cpp"), "#include \"a.h\"\n");
    write_file(&root.join("a.h"), "\n");

    let dot_path = root.join("styled.dot");
    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build")
        .arg(root.join("main.cpp"))
        .arg("--no-render")
        .arg("--dot")
        .arg(&dot_path)
        .arg("--dot-rankdir")
        .arg("TB")
        .arg("--dot-theme")
        .arg("dark")
        .arg("--dot-splines")
        .arg("polyline")
        .arg("--dot-rounded")
        .arg("off")
        .arg("--dot-legend")
        .arg("on");
    cmd.assert().success();

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("rankdir=TB"));
    assert!(dot.contains("splines=polyline"));
    assert!(dot.contains("style=\"filled\"")); // rounded off
    assert!(dot.contains("label=\"Legend\""));
}

#[test]
fn cli_stats_table() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("main.cpp"), "#include \"a.h\"\n#include \"b.h\"\n");
    write_file(&root.join("a.h"), "#include \"b.h\"\n");
    write_file(&root.join("b.h"), "\n");

    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build").arg(root.join("main.cpp")).arg("--no-render").arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Included by"))
        .stdout(predicate::str::contains("main.cpp"))
        .stdout(predicate::str::contains("b.h"));
}

fn write_file(path: &std::path::Path, content: &str) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}
