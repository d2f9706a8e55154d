//! satchel - stage local files and preview them inline in your terminal.
//!
//! Usage:
//!   satchel [FILES]...             Stage files and launch the TUI
//!   satchel inspect FILE           Print metadata and resolved preview strategy
//!   satchel --help                 Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};

use satchel_core::{format_file_size, resolve_strategy, stage_file, stage_files, PreviewStrategy};
use satchel_preview::{page_count, PreviewConfig};
use satchel_tui::TuiConfig;

#[derive(Parser)]
#[command(
    name = "satchel",
    version,
    about = "Stage local files and preview them inline in your terminal",
    long_about = "satchel keeps an ephemeral stash of local files for the \
                  current terminal session.\n\n\
                  Launch the interactive TUI with `satchel [FILES]...`, or use \
                  `satchel inspect` to look at a single file without entering \
                  the TUI."
)]
struct Cli {
    /// Files to stage on startup
    files: Vec<PathBuf>,

    /// Directory saved copies are written to (defaults to the current directory)
    #[arg(short = 'o', long)]
    save_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a file's metadata and resolved preview strategy
    Inspect {
        /// File to inspect
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Inspect { file, format }) => {
            run_inspect(&file, format)?;
        }
        None => {
            let staged = stage_files(&cli.files).context("Could not stage files")?;

            let preview = PreviewConfig::builder()
                .save_dir(cli.save_dir)
                .build()
                .context("Invalid preview configuration")?;
            satchel_tui::run_with_config(staged, TuiConfig::new().with_preview(preview))?;
        }
    }

    Ok(())
}

/// Inspect a single file without entering the TUI.
fn run_inspect(path: &Path, format: OutputFormat) -> Result<()> {
    let staged = stage_file(path)?;
    let strategy = resolve_strategy(&staged.media_type);

    let pages = match strategy {
        PreviewStrategy::PagedDocumentRender => page_count(&staged.bytes).ok(),
        _ => None,
    };

    match format {
        OutputFormat::Text => {
            println!("{}", staged.name);
            println!("  type      {}", staged.media_type);
            println!(
                "  size      {} ({} bytes)",
                format_file_size(staged.size_bytes),
                staged.size_bytes
            );
            println!("  preview   {strategy}");
            if let Some(pages) = pages {
                println!("  pages     {pages}");
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "name": staged.name,
                "media_type": staged.media_type,
                "size_bytes": staged.size_bytes,
                "size": format_file_size(staged.size_bytes),
                "strategy": strategy,
                "pages": pages,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
