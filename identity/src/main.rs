mod db;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8081".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let profiles = profile_client::ProfileClient::from_env().expect("profile client init failed");

    let registration = services::registration::RegistrationService::new(
        Arc::new(store::PgIdentityStore::new(pool)),
        Arc::new(profiles),
    );
    let state = state::AppState::new(Arc::new(registration));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "identity service listening");
    axum::serve(listener, app).await.expect("server failed");
}
