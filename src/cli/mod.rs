use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "include-graph-explorer",
    version,
    about = "C/C++ Include Graph System",
    long_about = "Scan a C/C++ tree from an entry file, follow #include directives, and render the inclusion graph with Graphviz. Include targets are resolved against the including file's directory only (quoted-include semantics); targets that do not resolve are omitted from the graph."
)]
pub struct Cli {
    /// Suppress the completion summary line
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the include graph from an entry file and render it
    Build {
        /// Entry source file the traversal starts from
        entry: PathBuf,
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Rendered image output path (default: includes.<format>)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Image format produced by Graphviz
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,
        /// Skip Graphviz rendering and the viewer (graph outputs only)
        #[arg(long, default_value_t = false)]
        no_render: bool,
        /// Open the rendered image with the system viewer
        #[arg(long, default_value_t = false)]
        view: bool,
        /// Output JSON file path
        #[arg(long)]
        json: Option<PathBuf>,
        /// Output DOT file path
        #[arg(long)]
        dot: Option<PathBuf>,
        /// Print a per-file include-degree table
        #[arg(long, default_value_t = false)]
        stats: bool,
        /// DOT: rank direction (BT puts included files below includers)
        #[arg(long, value_enum, default_value_t = RankDirArg::BT)]
        dot_rankdir: RankDirArg,
        /// DOT: theme (light or dark)
        #[arg(long, value_enum, default_value_t = DotThemeArg::Light)]
        dot_theme: DotThemeArg,
        /// DOT: edge splines style
        #[arg(long, value_enum, default_value_t = SplinesArg::Curved)]
        dot_splines: SplinesArg,
        /// DOT: rounded node corners (on/off)
        #[arg(long, value_enum, default_value_t = OnOffArg::On)]
        dot_rounded: OnOffArg,
        /// DOT: include legend (on/off)
        #[arg(long, value_enum, default_value_t = OnOffArg::Off)]
        dot_legend: OnOffArg,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnOffArg {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DotThemeArg {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankDirArg {
    #[value(name = "BT")]
    BT,
    #[value(name = "TB")]
    TB,
    #[value(name = "LR")]
    LR,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplinesArg {
    Curved,
    Ortho,
    Polyline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Svg,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
