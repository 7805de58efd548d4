use crate::cli::{Cli, Commands, DotThemeArg, FormatArg, OnOffArg, RankDirArg, SplinesArg};
use crate::graph::GraphBuilder;
use crate::visualization::{
    DotGenerator, DotOptions, DotTheme, EdgeStyle, ImageFormat, ImageRenderer, RankDir,
    RenderOptions,
};
use clap::CommandFactory;
use clap_complete::generate;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success). A missing entry file is not a
/// failure: the traversal completes with an empty graph. Only Graphviz or
/// viewer failures and invalid configuration are fatal.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn run_cli(cli: Cli) -> i32 {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = crate::cli::Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            let mut out = io::stdout();
            generate(shell, &mut cmd, bin_name, &mut out);
            0
        }
        Commands::Build {
            entry,
            config,
            out,
            format,
            no_render,
            view,
            json,
            dot,
            stats,
            dot_rankdir,
            dot_theme,
            dot_splines,
            dot_rounded,
            dot_legend,
        } => {
            // DOT/render options from flags, with config-file overrides
            let mut dot_opts = DotOptions {
                legend: matches!(dot_legend, OnOffArg::On),
                theme: match dot_theme {
                    DotThemeArg::Dark => DotTheme::Dark,
                    DotThemeArg::Light => DotTheme::Light,
                },
                rankdir: match dot_rankdir {
                    RankDirArg::BT => RankDir::BT,
                    RankDirArg::TB => RankDir::TB,
                    RankDirArg::LR => RankDir::LR,
                },
                splines: match dot_splines {
                    SplinesArg::Curved => EdgeStyle::Curved,
                    SplinesArg::Ortho => EdgeStyle::Ortho,
                    SplinesArg::Polyline => EdgeStyle::Polyline,
                },
                rounded: matches!(dot_rounded, OnOffArg::On),
                ..DotOptions::default()
            };
            let mut image_format = match format {
                FormatArg::Png => ImageFormat::Png,
                FormatArg::Svg => ImageFormat::Svg,
            };
            let mut open_view = view;

            if let Some(cfg_path) = config.as_ref() {
                let Some(cfg) = crate::utils::config::load_config_at(cfg_path) else {
                    eprintln!("Invalid or unreadable config file: {}", cfg_path.display());
                    return 1;
                };
                if let Some(d) = cfg.dot {
                    if let Some(v) = d.name {
                        dot_opts.name = v;
                    }
                    if let Some(v) = d.comment {
                        dot_opts.comment = v;
                    }
                    if let Some(v) = d.legend {
                        dot_opts.legend = v;
                    }
                    if let Some(v) = d.theme {
                        dot_opts.theme = if v == "dark" { DotTheme::Dark } else { DotTheme::Light };
                    }
                    if let Some(v) = d.rankdir {
                        dot_opts.rankdir = match v.as_str() {
                            "TB" => RankDir::TB,
                            "LR" => RankDir::LR,
                            _ => RankDir::BT,
                        };
                    }
                    if let Some(v) = d.splines {
                        dot_opts.splines = match v.as_str() {
                            "ortho" => EdgeStyle::Ortho,
                            "polyline" => EdgeStyle::Polyline,
                            _ => EdgeStyle::Curved,
                        };
                    }
                    if let Some(v) = d.rounded {
                        dot_opts.rounded = v;
                    }
                }
                if let Some(r) = cfg.render {
                    if let Some(v) = r.format {
                        image_format = if v == "svg" { ImageFormat::Svg } else { ImageFormat::Png };
                    }
                    if let Some(v) = r.view {
                        open_view = v;
                    }
                }
            }

            let mut builder = GraphBuilder::new();
            let graph = builder.build(&entry);
            for warning in builder.warnings() {
                eprintln!("Warning: {warning}");
            }

            if stats {
                let rows: Vec<Vec<String>> = graph
                    .degrees()
                    .iter()
                    .map(|&(id, ins, outs)| {
                        let path = graph
                            .node(id)
                            .map(|n| n.path.display().to_string())
                            .unwrap_or_default();
                        vec![path, outs.to_string(), ins.to_string()]
                    })
                    .collect();
                let table =
                    crate::utils::table::render(&["Path", "Includes", "Included by"], &rows);
                println!("{table}");
            }

            // Auxiliary outputs are best-effort: report and keep going.
            if let Some(json_path) = json {
                if let Err(e) = graph.save_json(&json_path) {
                    eprintln!("Failed to write JSON output {}: {e}", json_path.display());
                }
            }

            if let Some(dot_path) = dot {
                let content = DotGenerator::new().generate_dot_with_options(&graph, &dot_opts);
                if let Err(e) = fs::write(&dot_path, content) {
                    eprintln!("Failed to write DOT output {}: {e}", dot_path.display());
                }
            }

            if !no_render {
                let out_path = out.unwrap_or_else(|| {
                    PathBuf::from(format!("includes.{}", image_format.extension()))
                });
                let render_opts = RenderOptions { dot: dot_opts, format: image_format };
                if let Err(e) = ImageRenderer::new().render_to_file(&graph, &render_opts, &out_path)
                {
                    eprintln!("Render failed: {e}");
                    return 1;
                }
                if open_view {
                    if let Err(e) = crate::visualization::open_viewer(&out_path) {
                        eprintln!("Viewer failed: {e}");
                        return 1;
                    }
                }
            }

            if !cli.quiet {
                println!(
                    "Build completed for entry: {} ({} files, {} includes)",
                    entry.display(),
                    graph.nodes.len(),
                    graph.edges.len()
                );
            }
            0
        }
    }
}
