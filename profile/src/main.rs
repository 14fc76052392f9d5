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
        .unwrap_or_else(|_| "8082".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let profiles = services::profile::ProfileService::new(Arc::new(store::PgProfileStore::new(pool)));
    let state = state::AppState::new(Arc::new(profiles));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "profile service listening");
    axum::serve(listener, app).await.expect("server failed");
}
