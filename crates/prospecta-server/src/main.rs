mod api;
mod middleware;

use std::sync::Arc;

use prospecta_outreach::{CompletionClient, OutreachComposer, ProviderConfig};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = prospecta_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = CompletionClient::new(&ProviderConfig::from_app_config(&config))?;
    if !config.ai_configured() {
        tracing::warn!("OPENAI_API_KEY not set; outreach endpoints will return 503");
    }
    let state = AppState {
        composer: Arc::new(OutreachComposer::new(client)),
    };
    let rate_limit = RateLimitState::from_config(&config);
    let app = build_app(state, rate_limit);

    tracing::info!(
        env = %config.env,
        bind_addr = %config.bind_addr,
        model = %config.ai_model,
        "starting prospecta server"
    );
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
