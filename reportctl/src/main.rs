//! # reportctl
//!
//! Command-line front end for `report-render`: reads a report description
//! (TOML, YAML or JSON), validates it, lays it out and paints it.
//!
//! ## Usage
//!
//! ```bash
//! # HTML page next to the description
//! reportctl render demos/akbar_cashier.toml -o cashier.html
//!
//! # Terminal view
//! reportctl render demos/akbar_cashier.toml --format text
//!
//! # Validate only
//! reportctl check demos/akbar_cashier.toml
//! ```

mod load;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use report_render::{paint_html, paint_text, RenderOptions, ReportRenderer};
use tracing::info;

use crate::load::{load_model, SAMPLE_TOML};

#[derive(Parser, Debug)]
#[command(name = "reportctl")]
#[command(about = "Render structured report descriptions to HTML, text or JSON")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a report description
    Render(RenderArgs),
    /// Validate a report description without rendering it
    Check {
        /// Report description file (.toml, .yaml/.yml, otherwise JSON)
        input: PathBuf,
    },
    /// Print the bundled sample description (TOML)
    Sample,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Report description file (.toml, .yaml/.yml, otherwise JSON)
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Gauge track width; fills are measured against it
    #[arg(long, default_value_t = report_render::renderer::DEFAULT_TRACK_WIDTH)]
    track_width: f64,

    /// Never emit terminal colours in text output
    #[arg(long)]
    plain: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr; stdout carries the rendered report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run_render(args: RenderArgs) -> Result<()> {
    let renderer = ReportRenderer::new(RenderOptions {
        track_width: args.track_width,
    })
    .context("unusable --track-width")?;

    let model = load_model(&args.input)?;
    let tree = renderer.render(Some(&model))?;

    let rendered = match args.format {
        Format::Html => paint_html(&tree),
        Format::Json => report_render::paint_json(&tree).context("failed to serialize report")?,
        Format::Text => {
            let styled = !args.plain && args.output.is_none() && console::colors_enabled();
            paint_text(&tree, styled)
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                bytes = rendered.len(),
                format = ?args.format,
                "report written"
            );
        }
        None => write_stdout(&rendered)?,
    }
    Ok(())
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// A closed stdout (`reportctl render x.toml | head`) is not a failure.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn run_check(input: PathBuf) -> Result<()> {
    let model = load_model(&input)?;
    write_stdout(&format!(
        "ok: {} ({} issue groups, {} modules, {} stages, {} metrics)\n",
        model.title(),
        model.issues().len(),
        model.modules().len(),
        model.pipeline().len(),
        model.metrics().len()
    ))?;
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Check { input } => run_check(input),
        Command::Sample => Ok(write_stdout(SAMPLE_TOML)?),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
