use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use sanitize_filename::sanitize;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use sonostalgia_core::{Pages, sonostalgia_state};
use sonostalgia_shared::config::{Config, load_config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to read
    #[arg(long, default_value = Config::FILENAME)]
    config: String,

    /// Directory containing memory YAML files, overriding the config
    #[arg(long)]
    memories: Option<PathBuf>,

    /// Directory to write pages to, overriding the config
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sonostalgia=info")),
        )
        .init();

    let args = Args::parse();
    let mut config: Config = load_config(&args.config)?;
    if let Some(memories) = args.memories {
        config.paths.memories_dir = memories;
    }
    if let Some(output) = args.output {
        config.paths.output_dir = output;
    }

    let memories = sonostalgia_state::load_memories(&config.paths.memories_dir)
        .context("Error parsing memories")?;
    if memories.is_empty() {
        anyhow::bail!(
            "No memories found in {}",
            config.paths.memories_dir.display()
        );
    }

    let pages = Pages::build(&memories);
    tracing::info!(
        "Loaded {} memories with {} songs by {} artists, earliest in {}",
        pages.summary.memory_count,
        pages.summary.song_count,
        pages.summary.artist_count,
        pages.summary.earliest_memory,
    );

    let written = write_pages(&pages, &config.paths.output_dir, args.pretty)?;
    tracing::info!(
        "Wrote {written} pages to {}",
        config.paths.output_dir.display()
    );

    Ok(())
}

/// Writes every page as `<stem>.json` under `output_dir`, returning how many
/// were written. Stems are sanitized so that a page can never be written
/// outside `output_dir`.
fn write_pages(pages: &Pages, output_dir: &Path, pretty: bool) -> anyhow::Result<usize> {
    let mut written = 0;
    for page in pages.iter() {
        let Some(output_stem) = page.output_stem() else {
            tracing::warn!("Skipping {} page without an output title", page.template_name());
            continue;
        };

        let file_name = sanitize(format!("{output_stem}.json"));
        let page_dir = match page.output_subdir() {
            Some(subdir) => output_dir.join(subdir),
            None => output_dir.to_path_buf(),
        };
        std::fs::create_dir_all(&page_dir)
            .with_context(|| format!("Failed to create {}", page_dir.display()))?;
        let output_path = page_dir.join(&file_name);

        let json = if pretty {
            serde_json::to_string_pretty(&page)
        } else {
            serde_json::to_string(&page)
        }
        .with_context(|| format!("Failed to serialize {file_name}"))?;
        std::fs::write(&output_path, json)
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;

        tracing::debug!("Wrote {}", output_path.display());
        written += 1;
    }
    Ok(written)
}
