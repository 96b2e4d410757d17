use actix_web::{web, HttpServer};
use tracing::info;

use gk_api::{app, config, create_app, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    telemetry::init_tracing(&config.logging);

    info!(
        event = "server_starting",
        environment = %config.environment,
        bind = %config.server.bind_address(),
        "Starting Gatekeeper API server"
    );

    let state = web::Data::new(app::initialize(&config).await?);
    let max_payload = config.server.max_payload_size;

    let mut server = HttpServer::new(move || create_app(state.clone(), max_payload));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.server.bind_address())?.run().await?;

    info!(event = "server_stopped", "Server stopped");
    Ok(())
}
