//! chatdown - extract a chat transcript from an exported HTML page.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chatdown::{ExtractOptions, ExtractService, DEFAULT_MARKER};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chatdown", version, about = "Convert an exported chat HTML page to Markdown")]
struct Cli {
    /// Exported chat HTML file
    input: PathBuf,

    /// Markdown file to write (overwritten if it exists)
    output: PathBuf,

    /// Text of the block after which extraction starts
    #[arg(short, long, env = "CHATDOWN_MARKER", default_value = DEFAULT_MARKER)]
    marker: String,
}

/// Figures reported after a successful run
struct Summary {
    lines: usize,
    chars: usize,
    bytes: usize,
}

impl Summary {
    fn of(markdown: &str) -> Self {
        Self {
            lines: markdown.split('\n').count(),
            chars: markdown.chars().count(),
            bytes: markdown.len(),
        }
    }
}

fn main() -> ExitCode {
    // Log to stderr so the report on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("Input:  {}", cli.input.display());
    println!("Output: {}", cli.output.display());

    match run(&cli) {
        Ok(summary) => {
            println!("Done.");
            println!("  Lines: {}", summary.lines);
            println!("  Characters: {}", summary.chars);
            println!("  Size: {:.1} KB", summary.bytes as f64 / 1024.0);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Summary> {
    let html = read_input(&cli.input)?;

    let service = ExtractService::with_options(ExtractOptions {
        marker: cli.marker.clone(),
        ..Default::default()
    });
    let markdown = service
        .convert_html(&html)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    fs::write(&cli.output, &markdown)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    tracing::info!(path = %cli.output.display(), bytes = markdown.len(), "markdown written");

    Ok(Summary::of(&markdown))
}

fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}
