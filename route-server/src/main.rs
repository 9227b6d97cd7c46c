use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};

use route_server::config::{Backend, ServerConfig};
use route_server::logging;
use route_server::planner::RouteConfig;
use route_server::storage::{MockStore, RouteStore, SupabaseClient};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let result = match config.backend {
        Backend::Supabase(supabase) => match SupabaseClient::new(supabase) {
            Ok(client) => {
                info!("using Supabase store");
                serve(client, config.route, config.bind_addr).await
            }
            Err(e) => Err(e.to_string()),
        },
        Backend::Mock(path) => match MockStore::from_file(&path) {
            Ok(store) => {
                info!(path = %path.display(), "using in-memory store");
                serve(store, config.route, config.bind_addr).await
            }
            Err(e) => Err(e.to_string()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!(%message, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn serve<S: RouteStore + 'static>(
    store: S,
    route: RouteConfig,
    addr: SocketAddr,
) -> Result<(), String> {
    let app = create_router(AppState::new(store, route));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    info!(%addr, "route server listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /api/route        - Shortest route");
    info!("  PUT  /api/route        - Toggle an edge");
    info!("  GET  /api/distance     - List edges");
    info!("  POST /api/destination  - Add a place");

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
