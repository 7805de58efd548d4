use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn config_file_overrides_dot_flags() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("main.cpp"), "#include \"a.h\"\n");
    write_file(&root.join("a.h"), "\n");
    write_file(
        &root.join("include-graph-explorer.toml"),
        r#"
[dot]
name = "deps"
rankdir = "LR"
theme = "dark"
legend = true
"#,
    );

    let dot_path = root.join("graph.dot");
    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build")
        .arg(root.join("main.cpp"))
        .arg("--no-render")
        .arg("--dot")
        .arg(&dot_path)
        .arg("--config")
        .arg(root.join("include-graph-explorer.toml"));
    cmd.assert().success();

    let dot = fs::read_to_string(&dot_path).unwrap();
    // Config wins over the flag defaults
    assert!(dot.contains("digraph deps"));
    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains("label=\"Legend\""));
}

#[test]
fn invalid_explicit_config_is_fatal() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("main.cpp"), "int main() {}\n");
    write_file(&root.join("broken.toml"), "[dot\nrankdir=");

    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build")
        .arg(root.join("main.cpp"))
        .arg("--no-render")
        .arg("--config")
        .arg(root.join("broken.toml"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or unreadable config file"));
}

#[test]
fn load_config_near_probes_default_filename() {
    use include_graph_explorer::utils::config;

    let dir = tempdir().unwrap();
    let root = dir.path();
    assert!(config::load_config_near(root).is_none());

    write_file(&root.join("include-graph-explorer.toml"), "[render]\nformat = \"svg\"\n");
    let cfg = config::load_config_near(root).expect("config present");
    assert_eq!(cfg.render.and_then(|r| r.format).as_deref(), Some("svg"));
}

fn write_file(path: &std::path::Path, content: &str) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
}
