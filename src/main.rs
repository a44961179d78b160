use okron::{config, routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let state = state::AppState::from_config(&config);
    let tenants: Vec<&str> = state.resolver.codes().collect();
    tracing::info!(
        ?tenants,
        trust_forwarded_host = config.trust_forwarded_host,
        "tenant allow-list loaded"
    );

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "okron listening");
    axum::serve(listener, app).await.expect("server failed");
}
