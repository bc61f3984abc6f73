use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use evidex::config::Config;
use evidex::models::Document;
use evidex::processing::{Extraction, ProcessingPipeline};

#[derive(Parser)]
#[command(name = "evidex")]
#[command(about = "Extract and chunk text from evidence documents")]
struct Args {
    /// Documents to process
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Declared MIME type for every file; guessed from the extension when omitted
    #[arg(long)]
    mime: Option<String>,

    /// Chunk size in characters (overrides CHUNK_SIZE)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap between chunks in characters (overrides CHUNK_OVERLAP)
    #[arg(long)]
    overlap: Option<usize>,

    /// Print extracted pages instead of chunks
    #[arg(long)]
    pages: bool,
}

#[derive(Serialize)]
struct DocumentReport<'a, T> {
    file: String,
    declared_mime_type: &'a str,
    #[serde(flatten)]
    outcome: Extraction<T>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    init_tracing();

    let mut config = Config::from_env();
    if let Some(chunk_size) = args.chunk_size {
        config.processing.chunk_size = chunk_size;
    }
    if let Some(overlap) = args.overlap {
        config.processing.chunk_overlap = overlap;
    }

    tracing::info!(
        "Initializing pipeline (chunk_size={}, overlap={}, ocr_languages={})...",
        config.processing.chunk_size,
        config.processing.chunk_overlap,
        config.ocr.languages
    );
    let pipeline = Arc::new(ProcessingPipeline::from_config(&config));

    let tasks = args.files.iter().map(|path| {
        let pipeline = Arc::clone(&pipeline);
        let path = path.clone();
        let mime = args.mime.clone().unwrap_or_else(|| guess_mime(&path));
        let pages_only = args.pages;

        async move {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let line = tokio::task::spawn_blocking(move || {
                render(&pipeline, &path, &bytes, &mime, pages_only)
            })
            .await??;
            Ok::<_, anyhow::Error>(line)
        }
    });

    let reports: Vec<anyhow::Result<String>> = futures::future::join_all(tasks).await;

    let mut unreadable = 0;
    let mut stdout = std::io::stdout().lock();
    for report in reports {
        match report {
            Ok(line) => writeln!(stdout, "{line}")?,
            Err(e) => {
                tracing::error!("{:#}", e);
                unreadable += 1;
            }
        }
    }

    if unreadable > 0 {
        anyhow::bail!("{unreadable} file(s) could not be processed");
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "evidex=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the JSON records, so logs go to stderr
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn render(
    pipeline: &ProcessingPipeline,
    path: &Path,
    bytes: &[u8],
    mime_type: &str,
    pages_only: bool,
) -> anyhow::Result<String> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let doc = Document::new(bytes, filename, mime_type);
    let file = path.display().to_string();

    let line = if pages_only {
        serde_json::to_string(&DocumentReport {
            file,
            declared_mime_type: mime_type,
            outcome: pipeline.extractor().extract(&doc),
        })?
    } else {
        serde_json::to_string(&DocumentReport {
            file,
            declared_mime_type: mime_type,
            outcome: pipeline.process(&doc),
        })?
    };

    Ok(line)
}
