//! panelkit CLI
//!
//! Preview button list screens headlessly and validate screen configs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use panelkit_core::Size;
use panelkit_platform::parse_script;
use panelkit_widgets::ListScreenConfig;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod preview;

use preview::PreviewOptions;

#[derive(Parser)]
#[command(name = "panelkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "panelkit widget toolkit CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a button list without a host and print the result
    Preview {
        /// Button titles, comma separated
        #[arg(short, long, value_delimiter = ',')]
        items: Vec<String>,

        /// Read button titles from a file, one per line
        #[arg(long, conflicts_with = "items")]
        items_file: Option<PathBuf>,

        /// Screen width in pixels
        #[arg(long, default_value_t = 300)]
        width: i32,

        /// Screen height in pixels
        #[arg(long, default_value_t = 200)]
        height: i32,

        /// Type this into the search box (enables the search box)
        #[arg(short, long)]
        search: Option<String>,

        /// Screen configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Event script to replay before the final frame
        #[arg(long)]
        script: Option<PathBuf>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = Output::Layout)]
        output: Output,
    },

    /// Validate a screen configuration and print the effective values
    Config {
        /// Configuration file
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// Widget bounds after the final frame
    Layout,
    /// Draw commands recorded during the final frame
    Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Preview {
            items,
            items_file,
            width,
            height,
            search,
            config,
            script,
            output,
        } => cmd_preview(
            items,
            items_file.as_deref(),
            Size::new(width, height),
            search,
            config.as_deref(),
            script.as_deref(),
            output,
        ),

        Commands::Config { path } => cmd_config(&path),
    }
}

fn cmd_preview(
    items: Vec<String>,
    items_file: Option<&Path>,
    size: Size,
    search: Option<String>,
    config: Option<&Path>,
    script: Option<&Path>,
    output: Output,
) -> Result<()> {
    if size.width <= 0 || size.height <= 0 {
        anyhow::bail!("screen size must be positive, got {}x{}", size.width, size.height);
    }

    let items = match items_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => items,
    };

    let config = match config {
        Some(path) => ListScreenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ListScreenConfig::default(),
    };

    let script = match script {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_script(&source).with_context(|| format!("Invalid script {}", path.display()))?
        }
        None => Vec::new(),
    };

    info!(
        "Previewing {} items at {}x{}",
        items.len(),
        size.width,
        size.height
    );

    let preview = preview::render(PreviewOptions {
        items,
        size,
        config,
        search,
        script,
    });

    match output {
        Output::Layout => print!("{}", preview.layout),
        Output::Commands => {
            for command in &preview.commands {
                println!("{command:?}");
            }
        }
    }

    Ok(())
}

fn cmd_config(path: &Path) -> Result<()> {
    let config = ListScreenConfig::load(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;

    info!("{} is valid", path.display());
    let effective = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{effective}");

    Ok(())
}
