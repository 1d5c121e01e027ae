//! RouteGuard gateway binary.
//!
//! - Load `routeguard.yaml` (strict parsing + validate)
//! - Compile config into guards, session store, route table
//! - Serve the guarded routes plus `/healthz`

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use routeguard_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("routeguard.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("app state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "routeguard-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
