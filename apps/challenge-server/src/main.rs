//! 75-day challenge tracker server binary.

use std::net::SocketAddr;

use challenge_server::{config::Config, create_app, create_state, init_tracing};
use habit_store::MemoryHabitStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        jwt_expiration_hours = config.jwt_expiration_hours,
        "Starting challenge server"
    );

    // TODO: Swap in a durable HabitStore once one exists; records are lost on restart.
    let store = MemoryHabitStore::new();

    let state = create_state(&config, store);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
