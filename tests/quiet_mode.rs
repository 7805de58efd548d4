use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn quiet_suppresses_completion_summary() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let mut f = fs::File::create(root.join("main.cpp")).unwrap();
    f.write_all(b"int main() {}\n").unwrap();

    let mut cmd = Command::cargo_bin("include-graph-explorer").unwrap();
    cmd.arg("build").arg(root.join("main.cpp")).arg("--no-render").arg("--quiet");
    cmd.assert().success().stdout(predicate::str::contains("Build completed").not());
}
