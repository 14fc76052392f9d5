use super::*;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base: &str) -> ProfileClient {
    ProfileClient::new(ProfileClientConfig::new(base)).unwrap()
}

// =============================================================================
// URL construction
// =============================================================================

#[test]
fn user_url_joins_base_and_id() {
    let client = client_for("http://profile:8082");
    assert_eq!(client.user_url("u-1"), "http://profile:8082/api/v1/user/u-1");
    assert_eq!(client.users_url(), "http://profile:8082/api/v1/user");
}

#[test]
fn trailing_slash_on_base_does_not_double_up() {
    let client = client_for("http://profile:8082/");
    assert_eq!(client.user_url("u-1"), "http://profile:8082/api/v1/user/u-1");
}

// =============================================================================
// get_user_by_id against a loopback server
// =============================================================================

#[tokio::test]
async fn get_user_by_id_returns_decoded_user() {
    let router = Router::new().route(
        "/api/v1/user/{id}",
        get(|Path(id): Path<String>| async move { Json(UserResponse { id, name: "John Doe".into(), email: None }) }),
    );
    let base = spawn(router).await;

    let user = client_for(&base).get_user_by_id("u-123").await.unwrap();
    assert_eq!(user.id, "u-123");
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, None);
}

#[tokio::test]
async fn get_user_by_id_maps_404_to_status_error() {
    // No routes registered: every request 404s.
    let base = spawn(Router::new()).await;

    let err = client_for(&base).get_user_by_id("u-404").await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Status { status: 404, .. }));
}

#[tokio::test]
async fn get_user_by_id_maps_500_to_status_error() {
    let router = Router::new().route("/api/v1/user/{id}", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn(router).await;

    let err = client_for(&base).get_user_by_id("u-1").await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn get_user_by_id_maps_bad_body_to_parse_error() {
    let router = Router::new().route("/api/v1/user/{id}", get(|| async { "not json" }));
    let base = spawn(router).await;

    let err = client_for(&base).get_user_by_id("u-1").await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Parse(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}")).get_user_by_id("u-1").await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Request(_)));
}

#[tokio::test]
async fn stalled_service_times_out_as_request_error() {
    let router = Router::new().route(
        "/api/v1/user/{id}",
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            "late"
        }),
    );
    let base = spawn(router).await;

    let config = ProfileClientConfig {
        base_url: base,
        timeouts: ProfileClientTimeouts { request_secs: 1, connect_secs: 1 },
    };
    let err = ProfileClient::new(config).unwrap().get_user_by_id("u-1").await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Request(_)));
}

// =============================================================================
// create_profile
// =============================================================================

#[tokio::test]
async fn create_profile_posts_body_and_succeeds_on_created() {
    let router = Router::new().route(
        "/api/v1/user",
        post(|Json(body): Json<CreateProfileRequest>| async move {
            assert_eq!(body.auth_id, "42");
            assert_eq!(body.username, "alice");
            StatusCode::CREATED
        }),
    );
    let base = spawn(router).await;

    let request = CreateProfileRequest { auth_id: "42".into(), username: "alice".into(), email: "a@example.com".into() };
    client_for(&base).create_profile(&request).await.unwrap();
}

#[tokio::test]
async fn create_profile_maps_failure_status_to_error() {
    let router = Router::new().route("/api/v1/user", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn(router).await;

    let request = CreateProfileRequest { auth_id: "42".into(), username: "alice".into(), email: "a@example.com".into() };
    let err = client_for(&base).create_profile(&request).await.unwrap_err();
    assert!(matches!(err, ProfileClientError::Status { status: 500, .. }));
}

#[test]
fn status_error_display_names_the_status() {
    let err = ProfileClientError::Status { status: 503, body: "unavailable".into() };
    assert!(err.to_string().contains("503"));
}
