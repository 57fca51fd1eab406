use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use babelvox::application::services::TranslationPipeline;
use babelvox::domain::LanguageCode;
use babelvox::infrastructure::audio::TranscriptionEngineFactory;
use babelvox::infrastructure::observability::{TracingConfig, init_tracing};
use babelvox::infrastructure::speech::SpeechSynthesizerFactory;
use babelvox::infrastructure::storage::LocalScratchStore;
use babelvox::infrastructure::translation::TranslatorFactory;
use babelvox::presentation::config::ENVIRONMENT_VAR;
use babelvox::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var(ENVIRONMENT_VAR)
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let default_target_language = LanguageCode::parse(&settings.defaults.target_language)
        .context("Invalid defaults.target_language")?;

    let scratch_dir = settings.storage.resolved_scratch_dir();
    let scratch_store = Arc::new(
        LocalScratchStore::new(scratch_dir.clone())
            .with_context(|| format!("Failed to open scratch dir {}", scratch_dir.display()))?,
    );

    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("Failed to create transcription engine")?;
    let translator =
        TranslatorFactory::create(&settings.translation).context("Failed to create translator")?;
    let speech_synthesizer = SpeechSynthesizerFactory::create(&settings.synthesis)
        .context("Failed to create speech synthesizer")?;

    tracing::info!(
        transcription = ?settings.transcription.provider,
        translation = ?settings.translation.provider,
        synthesis = ?settings.synthesis.provider,
        scratch_dir = %scratch_dir.display(),
        "Capabilities initialized"
    );

    let translation_pipeline = Arc::new(TranslationPipeline::new(
        transcription_engine,
        translator,
        speech_synthesizer,
        scratch_store,
    ));

    let state = AppState::new(translation_pipeline, default_target_language);
    let router = create_router(
        state,
        &settings.server.static_dir,
        settings.server.max_upload_bytes,
    );

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
