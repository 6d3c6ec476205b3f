use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gist_common::{logger, AppConfig};
use gist_llm::{check_max_words, Summarizer, SummaryParams, SummaryRequest, DEFAULT_MAX_WORDS};
use std::io::Read;
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "gist")]
#[command(about = "gist - text summarization service backed by Gemini", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Return placeholder summaries instead of calling Gemini
        #[arg(long)]
        mock: bool,
    },

    /// Summarize a file (or stdin) once and print the result
    Summarize {
        /// Summary style, e.g. "concise" or "bullet points"
        #[arg(long)]
        style: Option<String>,

        /// Target maximum word count (20-400)
        #[arg(long)]
        max_words: Option<i64>,

        /// Return a placeholder summary instead of calling Gemini
        #[arg(long)]
        mock: bool,

        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env at project root is loaded before AppConfig reads the environment
    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port, mock }) => {
            // CLI arguments win over the environment
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.mock_mode |= mock;

            serve(config).await?;
        }
        Some(Commands::Summarize {
            style,
            max_words,
            mock,
            file,
        }) => {
            config.mock_mode |= mock;
            summarize_once(config, style, max_words, file).await?;
        }
        None => {
            serve(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    config.validate()?;
    logger::init(config.log_dir.as_deref(), &config.log_level)?;

    tracing::info!("gist starting...");
    tracing::info!("Configuration loaded: {:?}", config);

    gist_server::start_server(config).await?;
    Ok(())
}

async fn summarize_once(
    config: AppConfig,
    style: Option<String>,
    max_words: Option<i64>,
    file: Option<PathBuf>,
) -> Result<()> {
    config.validate()?;
    // stdout carries only the summary
    logger::setup_stderr_logging("warn")?;

    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let params = SummaryParams {
        style: match style {
            Some(label) => label.parse()?,
            None => Default::default(),
        },
        max_words: check_max_words(max_words.unwrap_or(DEFAULT_MAX_WORDS as i64))?,
    };

    let summarizer = Summarizer::from_config(&config)?;
    let summary = summarizer
        .summarize(&SummaryRequest::new(text, params)?)
        .await?;

    println!("{}", summary.text);
    Ok(())
}
