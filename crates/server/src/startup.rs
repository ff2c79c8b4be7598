use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::info;

use crate::routes::{self, ServerState};
use service::people::PeopleService;
use service::storage::memory::{MemoryPeopleStore, MemoryUserStore};
use service::users::UserService;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Build the shared state: one in-memory store per API surface.
pub fn build_state() -> ServerState {
    ServerState {
        users: Arc::new(UserService::new(Arc::new(MemoryUserStore::default()))),
        people: Arc::new(PeopleService::new(Arc::new(MemoryPeopleStore::default()))),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let state = build_state();
    let app: Router = routes::build_router(state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting registration server");
    println!("starting registration server at {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
