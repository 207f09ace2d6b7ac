mod setup;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;
use signbridge_models::{Config, SignLanguage, TranslateRequest};
use signbridge_translator::sign_gloss;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "signbridge-cli")]
#[command(about = "CLI tool for SignBridge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(long, default_value = "configs/default.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Create directories and default assets
    Setup {
        /// Directory the layout is created under
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Translate text through a running server
    Translate {
        /// Text to translate
        text: String,
        /// Sign language (isl, asl)
        #[arg(long, default_value = "isl")]
        language: String,
        /// Server endpoint
        #[arg(long, default_value = "http://localhost:5000")]
        endpoint: String,
    },
    /// Print the sign gloss without a server or rendering
    Gloss {
        /// Text to gloss
        text: String,
        /// Sign language (isl, asl)
        #[arg(long, default_value = "isl")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Setup { root } => {
            info!("Setting up SignBridge under {}", root.display());
            let report = setup::run_setup(&config.rooted_at(&root))?;
            println!(
                "Setup complete: {} directories created, {} files written, {} existing files kept",
                report.created_dirs.len(),
                report.written_files.len(),
                report.skipped_files.len()
            );
        }
        Commands::Translate {
            text,
            language,
            endpoint,
        } => {
            translate(&Client::new(), &endpoint, &text, &language).await?;
        }
        Commands::Gloss { text, language } => {
            let language: SignLanguage = language.parse()?;
            println!("{}", sign_gloss(language, &text).join(" "));
        }
    }

    Ok(())
}

fn translate_request(text: &str, language: &str) -> TranslateRequest {
    TranslateRequest {
        text: text.to_string(),
        language: Some(language.to_string()),
    }
}

async fn translate(client: &Client, endpoint: &str, text: &str, language: &str) -> Result<()> {
    let response = client
        .post(format!("{}/translate", endpoint.trim_end_matches('/')))
        .json(&translate_request(text, language))
        .send()
        .await?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("server returned {}", status);
    }
    Ok(())
}
