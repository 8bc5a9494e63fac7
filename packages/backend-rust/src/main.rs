use std::process::ExitCode;
use std::sync::Arc;

use wordjet_backend::config::Config;
use wordjet_backend::dictionary::{Dictionary, DictionaryError};
use wordjet_backend::logging::{self, LogSettings};
use wordjet_backend::state::AppState;
use wordjet_backend::store::{MemoryTallyStore, SqliteTallyStore, StoreError, TallyStore};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    let _log_guard = logging::init_tracing(&LogSettings::from_env(&config.log_level));

    match run(config).await {
        Ok(()) => {
            tracing::info!("Graceful shutdown complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "wordjet backend failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let dictionary = Dictionary::load(&config.dictionary_path)?;

    let store: Arc<dyn TallyStore> = if config.uses_memory_store() {
        tracing::warn!("using in-memory tally store; answers are lost on restart");
        Arc::new(MemoryTallyStore::new())
    } else {
        Arc::new(SqliteTallyStore::connect(&config.database).await?)
    };

    let state = AppState::from_config(&config, dictionary, store);
    let app = wordjet_backend::create_app(state, config.static_dir.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "wordjet backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
