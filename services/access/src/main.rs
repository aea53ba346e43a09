use sea_orm::Database;
use tracing::info;

use gatepass_access::config::AccessConfig;
use gatepass_access::infra::sms::HttpSmsSender;
use gatepass_access::router::build_router;
use gatepass_access::state::AppState;

#[tokio::main]
async fn main() {
    gatepass_core::tracing::init_tracing();

    let config = AccessConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let sms = HttpSmsSender::new(
        reqwest::Client::new(),
        config.sms_api_url,
        config.sms_api_key,
        config.sms_sender_id,
    );

    let state = AppState {
        db,
        sms,
        secure_cookies: config.secure_cookies,
        max_verify_attempts: config.max_verify_attempts,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.access_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("access service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
