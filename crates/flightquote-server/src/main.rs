use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use flightquote_core::reference::ReferenceData;
use flightquote_export::assets::AssetStore;
use flightquote_server::config::{LogFormat, ServerConfig};
use flightquote_server::router;
use flightquote_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let reference = ReferenceData::load(&config.airports_path, &config.corp_names_path);
    let assets = AssetStore::new(&config.public_dir);
    let state = AppState::new(reference, assets, config.theme);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(
        addr = %config.addr(),
        theme = %config.theme,
        public_dir = %config.public_dir.display(),
        "server listening"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
