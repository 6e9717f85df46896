use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use speech_coach::{
    create_router, AppState, Config, MemoryStore, OpenAiDelegate, SpeechAnalyzer,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "speech-coach", about = "Speech-coaching analysis service")]
struct Args {
    /// Configuration file (extension optional, may be absent entirely)
    #[arg(long, default_value = "config/speech-coach")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let analyzer = match cfg.openai.api_key.clone() {
        Some(api_key) => {
            info!("Delegate scoring enabled (model: {})", cfg.openai.model);
            let delegate = OpenAiDelegate::new(&cfg.openai, api_key)?;
            SpeechAnalyzer::with_delegate(Arc::new(delegate))
        }
        None => {
            info!("No delegate credential found, running in local-only mode");
            SpeechAnalyzer::new()
        }
    };

    let state = AppState::new(
        Arc::new(analyzer),
        Arc::new(MemoryStore::new()),
        &cfg.analysis,
    );
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
