use rp_server::{AppState, PollStore, ServerError, ShutdownCoordinator, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rp_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting rp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app_state = AppState {
        store: PollStore::new(),
        poll_config: config.poll.clone(),
    };
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: bind_addr,
        source,
    })?;
    info!("Server listening on {}", actual_addr);

    let shutdown = ShutdownCoordinator::new();
    shutdown.listen_for_signals();

    let grace = Duration::from_secs(config.server.shutdown_grace_secs);
    let server = {
        let shutdown = shutdown.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.wait().await })
                .await
        }
    };

    info!("Server ready to accept connections");
    shutdown
        .run_with_grace(server, grace)
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Graceful shutdown complete");
    Ok(())
}
