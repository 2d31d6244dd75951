//! doctext command-line interface.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use doctext::{ExtractionConfig, Extractor, detect_mime_type, is_remote};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Extracted text only
    Text,
    /// JSON object with source, MIME type and content
    Json,
}

#[derive(Parser)]
#[command(name = "doctext")]
#[command(version, about = "Extract plain text from documents, files and URLs", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a file or an http(s) URL
    Extract {
        /// File path or URL
        source: String,

        /// Force a MIME type instead of inferring one (files only)
        #[arg(short, long)]
        mime: Option<String>,

        /// Config file (.toml, .yaml, .yml or .json); defaults to a discovered doctext.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the MIME type inferred from a path or URL
    Detect {
        /// File path or URL
        source: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "doctext=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => {
            let config = ExtractionConfig::from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        None => match ExtractionConfig::discover().context("Failed to load discovered config")? {
            Some(config) => {
                tracing::debug!("Loaded discovered configuration");
                Ok(config)
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(ExtractionConfig::default())
            }
        },
    }
}

/// Returns the MIME type used and the text, or `None` when the file type is not recognised.
async fn extract(extractor: &Extractor, source: &str, mime: Option<String>) -> Result<Option<(String, String)>> {
    if is_remote(source) {
        if mime.is_some() {
            bail!("--mime applies to files only");
        }
        let extracted = extractor.extract_url_with_mime(source).await?;
        return Ok(Some((extracted.mime_type, extracted.content)));
    }

    match mime {
        Some(mime_type) => {
            let bytes = tokio::fs::read(source)
                .await
                .with_context(|| format!("Failed to read {}", source))?;
            let text = extractor.extract_bytes(&bytes, &mime_type).await?;
            Ok(Some((mime_type, text)))
        }
        None => {
            let Some(mime_type) = detect_mime_type(source) else {
                return Ok(None);
            };
            let text = extractor.extract_file(source).await?;
            Ok(text.map(|text| (mime_type, text)))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract {
            source,
            mime,
            config,
            format,
        } => {
            let config = load_config(config)?;
            let extractor = Extractor::new(config);

            tracing::debug!(source = %source, "Extracting");
            let Some((mime_type, text)) = extract(&extractor, &source, mime).await? else {
                eprintln!("Skipped {}: unsupported file type", source);
                return Ok(());
            };

            match format {
                OutputFormat::Text => print!("{}", text),
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "source": source,
                        "mime_type": mime_type,
                        "content": text,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }

            Ok(())
        }

        Commands::Detect { source } => match detect_mime_type(&source) {
            Some(mime_type) => {
                println!("{}", mime_type);
                Ok(())
            }
            None => {
                eprintln!("Could not determine MIME type of {}", source);
                std::process::exit(1);
            }
        },
    }
}
