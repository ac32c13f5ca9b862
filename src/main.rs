use anyhow::{Context, Result};
use tracing::{info, warn};

use locale_site::config::Config;
use locale_site::i18n::Locale;
use locale_site::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting localized site");

    // Load configuration from environment
    let config = Config::from_env()?;

    let missing = config.missing_bundles();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Bundles missing from LOCALES_DIR, these locales will fall back to the default"
        );
    }

    // Warm the default locale so a broken bundle shows up at startup
    let state = AppState::from_config(&config);
    state.dictionaries.load_locale(Locale::default_locale());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        addr = %addr,
        default_locale = %Locale::default_locale(),
        source = ?config.bundle_source(),
        "Listening"
    );

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
