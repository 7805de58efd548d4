//! Graph model and builder for the crate.
//!
//! This module defines the data structures for the include graph
//! (`IncludeGraph`, `FileNode`, `IncludeEdge`) and the traversal that
//! populates them from an entry file.
//!
//! You typically construct a graph via `GraphBuilder::build` and then pass
//! it to `crate::visualization` for DOT/image output.
use crate::errors::UnreadableFile;
use crate::parser::{IncludeParser, IncludeRef, IncludeStyle};
use crate::utils::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Node identifier, assigned sequentially in visit order. A path keeps the
/// id from its first visit for the lifetime of the graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Coarse file classification used for node styling and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Header,
    Source,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    /// Identity key: the path exactly as it was resolved during traversal.
    pub path: PathBuf,
    /// Display label: base filename without directory.
    pub label: String,
}

impl FileNode {
    #[must_use]
    pub fn kind(&self) -> FileKind {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("h" | "hpp" | "hh" | "hxx" | "inl") => FileKind::Header,
            Some("c" | "cc" | "cpp" | "cxx" | "m" | "mm") => FileKind::Source,
            _ => FileKind::Other,
        }
    }
}

/// Directed include relationship: `from` includes `to`. Duplicates are
/// permitted; only nodes are deduplicated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncludeEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub style: IncludeStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphMetadata {
    pub entry: PathBuf,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IncludeGraph {
    pub nodes: Vec<FileNode>,
    pub edges: Vec<IncludeEdge>,
    pub metadata: GraphMetadata,
}

impl IncludeGraph {
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&FileNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn node_by_path(&self, path: &Path) -> Option<&FileNode> {
        self.nodes.iter().find(|n| n.path == path)
    }

    /// Per-node (in-degree, out-degree) pairs in node-id order.
    #[must_use]
    pub fn degrees(&self) -> Vec<(NodeId, usize, usize)> {
        let mut ins = vec![0usize; self.nodes.len()];
        let mut outs = vec![0usize; self.nodes.len()];
        for e in &self.edges {
            outs[e.from.0] += 1;
            ins[e.to.0] += 1;
        }
        self.nodes.iter().map(|n| (n.id, ins[n.id.0], outs[n.id.0])).collect()
    }

    /// Convenience builder that discards per-file warnings.
    ///
    /// Use `GraphBuilder` directly when the warnings matter.
    #[must_use]
    pub fn build_from_entry(entry: &Path) -> Self {
        GraphBuilder::new().build(entry)
    }

    /// Save the graph as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Io` if serialization or writing the file fails.
    pub fn save_json(&self, path: &Path) -> Result<(), crate::errors::IncludeGraphError> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| crate::errors::IncludeGraphError::Io(std::io::Error::other(e.to_string())))?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Load a graph from a JSON file.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Io` if reading the file fails or the JSON is invalid.
    pub fn load_json(path: &Path) -> Result<Self, crate::errors::IncludeGraphError> {
        let data = fs::read_to_string(path)?;
        let graph: IncludeGraph = serde_json::from_str(&data)
            .map_err(|e| crate::errors::IncludeGraphError::Io(std::io::Error::other(e.to_string())))?;
        Ok(graph)
    }
}

/// One open file during traversal: its node id, the directory includes are
/// resolved against, the not-yet-expanded includes, and the edge owed to
/// the parent once this file's subtree completes.
#[derive(Debug)]
struct Frame {
    id: NodeId,
    dir: PathBuf,
    includes: std::vec::IntoIter<IncludeRef>,
    emit_on_exit: Option<(NodeId, IncludeStyle)>,
}

/// Depth-first include traversal with an explicit frame stack.
///
/// All traversal state (visited map, id counter) is scoped to one `build`
/// call; the builder itself only carries the compiled parser and the
/// warnings from the most recent build, so it is freely reusable.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    parser: IncludeParser,
    warnings: Vec<UnreadableFile>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self { parser: IncludeParser::new(), warnings: Vec::new() }
    }

    /// Warnings collected by the most recent `build` call.
    #[must_use]
    pub fn warnings(&self) -> &[UnreadableFile] {
        &self.warnings
    }

    /// Build the include graph reachable from `entry`.
    ///
    /// An entry that is not an existing file yields an empty graph; include
    /// targets that do not resolve to an existing file are skipped. Neither
    /// is an error. Files that exist but cannot be read keep their node,
    /// contribute no edges, and are reported via `warnings()`.
    pub fn build(&mut self, entry: &Path) -> IncludeGraph {
        self.warnings.clear();
        let mut graph = IncludeGraph {
            metadata: GraphMetadata { entry: entry.to_path_buf(), generated_at: timestamp() },
            ..IncludeGraph::default()
        };
        if !entry.is_file() {
            return graph;
        }

        let mut visited: HashMap<PathBuf, NodeId> = HashMap::new();
        let mut stack: Vec<Frame> = Vec::new();
        let entry_id = register_node(&mut graph, &mut visited, entry);
        stack.push(self.open_frame(entry_id, entry, None));

        loop {
            let Some(frame) = stack.last_mut() else { break };
            match frame.includes.next() {
                Some(inc) => {
                    let from = frame.id;
                    let resolved = paths::resolve_in_dir(&frame.dir, &inc.target);
                    if !resolved.is_file() {
                        continue;
                    }
                    if let Some(&seen) = visited.get(&resolved) {
                        // Cycle or diamond: point back at the existing node.
                        graph.edges.push(IncludeEdge { from, to: seen, style: inc.style });
                    } else {
                        let child = register_node(&mut graph, &mut visited, &resolved);
                        stack.push(self.open_frame(child, &resolved, Some((from, inc.style))));
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        // The edge to a freshly expanded file is recorded only
                        // after its whole subtree has been walked, matching the
                        // order a recursive descent would produce.
                        if let Some((parent, style)) = done.emit_on_exit {
                            graph.edges.push(IncludeEdge { from: parent, to: done.id, style });
                        }
                    }
                }
            }
        }
        graph
    }

    fn open_frame(
        &mut self,
        id: NodeId,
        path: &Path,
        emit_on_exit: Option<(NodeId, IncludeStyle)>,
    ) -> Frame {
        let includes = match fs::read_to_string(path) {
            Ok(content) => self.parser.extract_includes(&content),
            Err(source) => {
                self.warnings.push(UnreadableFile { path: path.to_path_buf(), source });
                Vec::new()
            }
        };
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Frame { id, dir, includes: includes.into_iter(), emit_on_exit }
    }
}

// Registration happens before the file's includes are expanded, so a
// self-referential include resolves through the visited map.
fn register_node(
    graph: &mut IncludeGraph,
    visited: &mut HashMap<PathBuf, NodeId>,
    path: &Path,
) -> NodeId {
    let id = NodeId(graph.nodes.len());
    visited.insert(path.to_path_buf(), id);
    graph.nodes.push(FileNode {
        id,
        path: path.to_path_buf(),
        label: paths::display_name(path),
    });
    id
}

fn timestamp() -> String {
    match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(d) => format!("{}", d.as_secs()),
        Err(_) => "0".to_string(),
    }
}
