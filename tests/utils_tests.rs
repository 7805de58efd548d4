use include_graph_explorer::utils::{paths, table};
use std::path::Path;

#[test]
fn table_renderer_produces_expected_grid() {
    let headers = ["A", "B"];
    let rows = vec![vec!["x".into(), "y".into()], vec!["long".into(), "z".into()]];
    let out = table::render(&headers, &rows);
    assert!(out.starts_with("+"));
    assert!(out.contains("| A"));
    assert!(out.contains("long"));
}

#[test]
fn display_name_uses_base_filename() {
    assert_eq!(paths::display_name(Path::new("src/babytorch/scalar.hpp")), "scalar.hpp");
    assert_eq!(paths::display_name(Path::new("main.cpp")), "main.cpp");
}

#[test]
fn include_resolution_is_lexical_and_relative_to_dir() {
    let resolved = paths::resolve_in_dir(Path::new("src/babytorch"), "ptr.hpp");
    assert_eq!(resolved, Path::new("src/babytorch/ptr.hpp"));

    // Parent-relative targets stay lexical: no normalization happens
    let up = paths::resolve_in_dir(Path::new("src/babytorch"), "../functions.hpp");
    assert_eq!(up, Path::new("src/babytorch/../functions.hpp"));
}
