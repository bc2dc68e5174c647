// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! depgraph CLI entrypoint.
//!
//! Renders a backlog's dependency view to SVG or a JSON command list, prints the layer
//! assignment, or opens the interactive terminal viewer.

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use depgraph::config::EngineConfig;
use depgraph::layout::{assign_layers, extract_graph, LayerKind, Layering};
use depgraph::model::Backlog;
use depgraph::render::SvgSurface;
use depgraph::tui::{self, BacklogSource};
use depgraph::viewport::{RepaintTrigger, Viewport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(version, about = "Layered dependency view for backlog items", long_about = None)]
#[command(after_help = "EXAMPLES:
    depgraph render items.json -o deps.svg
    depgraph render items.json --format json --width 1280 --dpr 2
    depgraph layers items.json
    depgraph view --demo")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Engine config (TOML); missing fields keep their defaults.
    #[arg(long, global = true, env = "DEPGRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one frame to SVG or to a JSON list of drawing commands.
    Render(RenderArgs),
    /// Print the layer assignment, one line per layer.
    Layers { input: PathBuf },
    /// Open the interactive terminal viewer.
    View(ViewArgs),
    /// Print the JSON schema of the accepted item format.
    Schema,
}

#[derive(Parser)]
struct RenderArgs {
    input: PathBuf,

    /// Container width in logical pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Device pixel ratio.
    #[arg(long)]
    dpr: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ViewArgs {
    #[arg(required_unless_present = "demo")]
    input: Option<PathBuf>,

    /// Use the built-in demo backlog.
    #[arg(long, conflicts_with = "input")]
    demo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.quiet, cli.verbose) {
        // The viewer owns the screen; log lines would land on top of it.
        (Commands::View(_), _, _) => "off",
        (_, true, _) => "error",
        (_, _, true) => "debug",
        _ => "warn",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => render(args, config),
        Commands::Layers { input } => {
            let backlog = load_backlog(&input)?;
            let graph = extract_graph(backlog.items());
            let layering = assign_layers(&graph, config.layout.max_layer_passes);
            print!("{}", format_layers(&layering));
            Ok(())
        }
        Commands::View(args) => {
            let source = match args.input {
                Some(path) if !args.demo => BacklogSource::File(path),
                _ => BacklogSource::Demo,
            };
            tui::run(source, config).context("terminal viewer failed")
        }
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&Backlog::json_schema())
                .context("failed to serialize schema")?;
            println!("{schema}");
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn load_backlog(path: &Path) -> Result<Backlog> {
    Backlog::from_path(path).with_context(|| format!("failed to load items from {}", path.display()))
}

fn render(args: RenderArgs, mut config: EngineConfig) -> Result<()> {
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(dpr) = args.dpr {
        config.viewport.device_pixel_ratio = dpr;
    }

    let backlog = load_backlog(&args.input)?;
    let viewport = Viewport::from_config(&config.viewport);

    let output = match args.format {
        OutputFormat::Svg => {
            let mut surface = SvgSurface::default().with_background(config.theme.background);
            let report =
                viewport.repaint(RepaintTrigger::Opened, &mut surface, backlog.items(), &config);
            tracing::info!(
                nodes = report.layout().len(),
                edges = report.edges().len(),
                placeholder = report.is_placeholder(),
                "rendered SVG"
            );
            surface.into_document()
        }
        OutputFormat::Json => {
            let commands = viewport.record(RepaintTrigger::Opened, backlog.items(), &config);
            let mut json = serde_json::to_string_pretty(&commands)
                .context("failed to serialize render commands")?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => io::stdout().write_all(output.as_bytes()).context("failed to write to stdout")?,
    }
    Ok(())
}

fn format_layers(layering: &Layering) -> String {
    if layering.is_empty() {
        return "no dependencies between backlog items\n".to_owned();
    }

    let mut out = String::new();
    for (idx, layer) in layering.layers().iter().enumerate() {
        let ids = layer.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(", ");
        let note = match layering.kind(idx) {
            Some(LayerKind::ForceFlushed) => " (cycle, force-flushed)",
            Some(LayerKind::Overflow) => " (pass cap reached)",
            Some(LayerKind::Ready) | None => "",
        };
        let _ = writeln!(out, "{idx}: {ids}{note}");
    }
    out
}
