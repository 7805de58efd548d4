use crate::errors::IncludeGraphError;
use crate::graph::{FileKind, IncludeGraph};
use crate::parser::IncludeStyle;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotTheme {
    Light,
    Dark,
}

/// Rank direction for the rendered hierarchy. `BT` is the default: included
/// files sit below their includers, so the entry file ends up on top.
/// Changing it changes the visual meaning of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    BT,
    TB,
    LR,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Curved,
    Ortho,
    Polyline,
}

#[derive(Debug, Clone)]
pub struct DotOptions {
    pub name: String,
    pub comment: String,
    pub legend: bool,
    pub theme: DotTheme,
    pub rankdir: RankDir,
    pub splines: EdgeStyle,
    pub rounded: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            name: "includes".to_string(),
            comment: "The project structure".to_string(),
            legend: false,
            theme: DotTheme::Light,
            rankdir: RankDir::BT,
            splines: EdgeStyle::Curved,
            rounded: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    fn dot_arg(self) -> &'static str {
        match self {
            ImageFormat::Png => "-Tpng",
            ImageFormat::Svg => "-Tsvg",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub dot: DotOptions,
    pub format: ImageFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dot: DotOptions::default(), format: ImageFormat::Png }
    }
}

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generate DOT with default options.
    #[must_use]
    pub fn generate_dot(&self, graph: &IncludeGraph) -> String {
        self.generate_dot_with_options(graph, &DotOptions::default())
    }

    /// Generate DOT text for `graph` with the given `opts`.
    ///
    /// Nodes are emitted once per distinct file in id order; edges follow in
    /// traversal order, so the output is deterministic for a given tree.
    #[must_use]
    pub fn generate_dot_with_options(&self, graph: &IncludeGraph, opts: &DotOptions) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "// {}", opts.comment);
        let _ = writeln!(s, "digraph {}\n{{", sanitize_id(&opts.name));
        let rank = match opts.rankdir {
            RankDir::BT => "BT",
            RankDir::TB => "TB",
            RankDir::LR => "LR",
        };
        let splines = match opts.splines {
            EdgeStyle::Curved => "curved",
            EdgeStyle::Ortho => "ortho",
            EdgeStyle::Polyline => "polyline",
        };
        let node_style = if opts.rounded { "filled,rounded" } else { "filled" };
        let _ = write!(
            s,
            "  rankdir={rank};\n  graph [fontname=Helvetica, splines={splines}] ;\n  node [shape=box, fontsize=10, style=\"{node_style}\"] ;\n  edge [fontname=Helvetica, fontsize=9];\n"
        );

        for node in &graph.nodes {
            let fill = fill_for_kind(node.kind(), opts.theme);
            let tooltip = escape_label(&node.path.display().to_string());
            let _ = writeln!(
                s,
                "  \"n{}\" [label=\"{}\", fillcolor=\"{fill}\", tooltip=\"{tooltip}\"];",
                node.id.0,
                escape_label(&node.label)
            );
        }

        for edge in &graph.edges {
            let style = match edge.style {
                IncludeStyle::Quoted => "solid",
                IncludeStyle::Angled => "dashed",
            };
            let _ = writeln!(s, "  \"n{}\" -> \"n{}\" [style=\"{style}\"];", edge.from.0, edge.to.0);
        }

        if opts.legend {
            s.push_str("  subgraph cluster_legend {\n    label=\"Legend\";\n    color=grey;\n");
            let legend_items =
                [("Header", FileKind::Header), ("Source", FileKind::Source), ("Other", FileKind::Other)];
            for (name, kind) in legend_items {
                let fill = fill_for_kind(kind, opts.theme);
                let id = sanitize_id(&format!("legend_{name}"));
                let _ = writeln!(s, "    \"{id}\" [label=\"{name}\", fillcolor=\"{fill}\"]; ");
            }
            s.push_str("  }\n");
        }

        s.push_str("}\n");
        s
    }
}

#[derive(Debug, Default)]
pub struct ImageRenderer;

impl ImageRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Render `graph` to raw image bytes using Graphviz.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Visualization` if invoking Graphviz fails
    /// or the process exits with a non-success status.
    pub fn render_with_options(
        &self,
        graph: &IncludeGraph,
        opts: &RenderOptions,
    ) -> Result<Vec<u8>, IncludeGraphError> {
        let dot = DotGenerator::new().generate_dot_with_options(graph, &opts.dot);
        let output = std::process::Command::new("dot")
            .arg(opts.format.dot_arg())
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .spawn()
            .and_then(|mut child| {
                use std::io::Write;
                if let Some(stdin) = child.stdin.as_mut() {
                    stdin.write_all(dot.as_bytes())?;
                }
                child.wait_with_output()
            })
            .map_err(|e| {
                IncludeGraphError::Visualization(format!("Failed to run graphviz 'dot': {e}"))
            })?;
        if !output.status.success() {
            return Err(IncludeGraphError::Visualization(format!(
                "Graphviz 'dot' failed with code {:?}",
                output.status.code()
            )));
        }
        Ok(output.stdout)
    }

    /// Render `graph` and write the image to `path`.
    ///
    /// # Errors
    /// Returns `IncludeGraphError::Visualization` on Graphviz failure or if
    /// the image file cannot be written.
    pub fn render_to_file(
        &self,
        graph: &IncludeGraph,
        opts: &RenderOptions,
        path: &Path,
    ) -> Result<(), IncludeGraphError> {
        let bytes = self.render_with_options(graph, opts)?;
        std::fs::write(path, bytes).map_err(|e| {
            IncludeGraphError::Visualization(format!(
                "Failed to write image {}: {e}",
                path.display()
            ))
        })
    }
}

/// Open `path` with the platform's default viewer.
///
/// # Errors
/// Returns `IncludeGraphError::Visualization` if the opener cannot be
/// spawned or reports a non-success status.
pub fn open_viewer(path: &Path) -> Result<(), IncludeGraphError> {
    let status = viewer_command(path)
        .status()
        .map_err(|e| IncludeGraphError::Visualization(format!("Failed to launch viewer: {e}")))?;
    if !status.success() {
        return Err(IncludeGraphError::Visualization(format!(
            "Viewer exited with code {:?}",
            status.code()
        )));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.arg("/C").arg("start").arg("").arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

fn sanitize_id(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => c,
            _ => '_',
        })
        .collect()
}

fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn fill_for_kind(kind: FileKind, theme: DotTheme) -> &'static str {
    match (theme, kind) {
        (DotTheme::Light, FileKind::Header) => "#e0f3ff",
        (DotTheme::Light, FileKind::Source) => "#e8ffe0",
        (DotTheme::Light, FileKind::Other) => "#f0f0f0",
        (DotTheme::Dark, FileKind::Header) => "#124559",
        (DotTheme::Dark, FileKind::Source) => "#0b6e4f",
        (DotTheme::Dark, FileKind::Other) => "#4a4a4a",
    }
}
