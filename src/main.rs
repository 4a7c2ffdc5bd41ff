use devops_demo::{app, config::ServerConfig, telemetry};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    telemetry::init_logging(&config).expect("Failed to initialize logging");

    let app = app();

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind server address");
    info!("Server starting at http://{}", config.bind_addr());

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server exited with an error");
}
