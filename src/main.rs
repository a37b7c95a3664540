use anyhow::{Context, Result};
use axum::serve;
use bloodbank::core::config::Config;
use bloodbank::core::routes::build_router;
use bloodbank::core::startup::check_user_table;
use bloodbank::core::state::AppState;
use bloodbank::core::tracing_init::init_tracing;
use bloodbank::stores::session_store::SessionStore;
use bloodbank::utils::time::current_timestamp;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{debug, info, Level};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    let config = Config::from_file(&config_path).context(format!(
        "Failed to load configuration from '{}'. \
        Copy config.example.toml to config.toml and adjust the values.",
        config_path.display()
    ))?;

    init_tracing(&config.logging);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        users_path = %config.storage.users_path.display(),
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "Blood bank finder starting"
    );

    let state = AppState::new(config.clone());

    let users = check_user_table(&state)?;

    spawn_session_cleanup_task(
        Arc::clone(&state.sessions),
        config.session.cleanup_interval,
    );

    info!(
        users,
        session_ttl_seconds = config.session.ttl,
        cleanup_interval_seconds = config.session.cleanup_interval,
        "Startup complete"
    );

    let app = build_router(Arc::new(state)).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "Listening");

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down gracefully");

    Ok(())
}

/// Periodically drop expired sessions
fn spawn_session_cleanup_task(sessions: Arc<SessionStore>, cleanup_interval: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(cleanup_interval));

        loop {
            interval.tick().await;

            let removed = sessions.cleanup_expired(current_timestamp());

            if removed > 0 {
                info!(
                    removed_sessions = removed,
                    active_sessions = sessions.len(),
                    "Session cleanup completed"
                );
            } else {
                debug!("Session cleanup completed, nothing expired");
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
