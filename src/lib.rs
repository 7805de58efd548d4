//! include-graph-explorer — C/C++ Include Graph System
//!
//! Scan a C/C++ source tree from an entry file, follow `#include`
//! directives, and render the resulting file-inclusion graph.
//!
//! # Features
//! - Depth-first traversal with node deduplication (cycles and diamond
//!   dependencies never re-expand)
//! - Local-directory include resolution (quoted-include semantics)
//! - DOT, PNG and SVG visualization via Graphviz, JSON export
//! - Per-file warnings for unreadable sources; missing headers are skipped
//!
//! # Quickstart (Library)
//! ```no_run
//! use include_graph_explorer::graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let graph = builder.build(std::path::Path::new("src/main.cpp"));
//! println!("files: {} includes: {}", graph.nodes.len(), graph.edges.len());
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! include-graph-explorer build src/main.cpp --out includes.png --view
//! include-graph-explorer build src/main.cpp --no-render --dot includes.dot
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod parser;
pub mod utils;
pub mod visualization;
