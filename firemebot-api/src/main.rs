use firemebot_api::build_router;
use firemebot_app::config::AppConfig;
use firemebot_app::AppContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_context = AppContext::from_config(&config);
    let app = build_router(app_context);

    tracing::info!("Listening on http://{}", config.bind_addr);
    tracing::info!("CORS policy for unmatched origins: {:?}", config.cors_unmatched);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
