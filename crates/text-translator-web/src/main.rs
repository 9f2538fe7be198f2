//! Text Translator Web - HTTP server for text translation with language
//! auto-detection.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use text_translator_core::{TranslatorConfig, DEFAULT_API_BASE};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_translator_web::{app, state::AppState};

#[derive(Parser, Debug)]
#[command(name = "text-translator-web")]
#[command(author, version, about = "Text Translator Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3216")]
    port: u16,

    /// Translation provider base URL
    #[arg(long, env = "TRANSLATE_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Provider request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = TranslatorConfig {
        api_base: args.api_base,
        timeout_secs: args.timeout,
    };
    let state = Arc::new(AppState::new(&config));

    info!(
        "Using translation provider: {}",
        state.translator.translator_info().name
    );

    let router = app(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
