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
        .unwrap_or_else(|_| "8083".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    let users = profile_client::ProfileClient::from_env().expect("profile client init failed");

    let tasks = services::task::TaskService::new(Arc::new(store::PgTaskStore::new(pool)), Arc::new(users));
    let state = state::AppState::new(Arc::new(tasks));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "task service listening");
    axum::serve(listener, app).await.expect("server failed");
}
