use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use mdpreview::{ConversionResponse, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Render PDF-extraction Markdown as an HTML preview fragment")]
struct Cli {
    /// Treat each input as a conversion-service JSON response
    #[arg(long)]
    response: bool,
    /// Prepend a metadata summary to the fragment
    #[arg(long, requires = "response")]
    metadata: bool,
    /// Markdown (or JSON response) files to render
    files: Vec<PathBuf>,
}

fn render_input(input: &str, cli: &Cli) -> anyhow::Result<String> {
    if !cli.response {
        return Ok(render(input));
    }
    let response: ConversionResponse =
        serde_json::from_str(input).context("failed to decode conversion response")?;
    if !response.success {
        anyhow::bail!("{}", response.error_message());
    }
    tracing::debug!(filename = %response.filename, "decoded conversion response");
    Ok(response.preview(cli.metadata))
}

/// Entry point for the command-line renderer.
///
/// With no file arguments the Markdown document (or, with `--response`, the
/// conversion-service JSON) is read from standard input; otherwise each file
/// is rendered in sequence. The resulting HTML fragments are printed to
/// standard output.
///
/// # Examples
///
/// ```sh
/// # Render a Markdown file to an HTML fragment
/// mdpreview extracted.md
///
/// # Render straight from a conversion response, with the metadata summary
/// curl -s localhost:8000/api/convert -F file=@doc.pdf \
///     | mdpreview --response --metadata
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", render_input(&input, &cli)?.trim_end());
        return Ok(());
    }

    for path in &cli.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        tracing::debug!(path = %path.display(), "rendering input");
        println!("{}", render_input(&content, &cli)?.trim_end());
    }

    Ok(())
}
