//! Doxref CLI - regenerate a flattened Markdown API reference from a
//! machine-generated XML documentation corpus.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use doxref_core::{DocPipeline, MarkdownGenerator};

#[derive(Parser)]
#[command(name = "doxref")]
#[command(version = doxref_core::VERSION)]
#[command(about = "Generate a Markdown API reference from a Doxygen XML corpus", long_about = None)]
struct Cli {
    /// Directory containing index.xml and the per-compound detail documents
    input: PathBuf,

    /// Root namespace of the documented library
    #[arg(short = 'n', long)]
    namespace: String,

    /// Write the reference to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pipeline = DocPipeline::new(&cli.input, &cli.namespace);
    let modules = pipeline
        .resolve()
        .await
        .with_context(|| format!("failed to resolve corpus in `{}`", cli.input.display()))?;

    // Rendering is buffered; nothing reaches the destination unless the
    // whole run succeeded.
    let reference = MarkdownGenerator::generate(&modules);

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &reference)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            println!("Wrote {} module(s) to {}", modules.len(), path.display());
        }
        None => {
            std::io::stdout()
                .write_all(reference.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
