use std::net::SocketAddr;

use stock_gateway::router::create_router;
use stock_gateway::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting stock gateway service");

    let state = AppState::new();
    let app = create_router(state);

    // Development port; the service carries no external configuration.
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
