//! API Integration Tests
//!
//! Most tests run against a server backed by the in-memory user directory.
//! The `postgres_` tests additionally require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET_KEY
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, session_cookie, TestServer,
};
use reqwest::{header, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Page Tests
// ============================================================================

#[tokio::test]
async fn test_static_pages() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/", "/register", "/chat"] {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "GET {path}");
    }
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post("/register", &creds).await.unwrap();
    assert_eq!(response.headers()[header::LOCATION], "/");
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.username, creds.username);
    assert_eq!(
        created.message,
        format!("User {} has been created successfully", creds.username)
    );
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    server.post("/register", &creds).await.unwrap();

    let response = server
        .post("/register", &creds.with_password("another"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "This user already exists");
}

#[tokio::test]
async fn test_browser_login_flow() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_form("/register", &[("username", "  dana  "), ("password", "p1")])
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_form("/login", &[("username", "dana"), ("password", "p1")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/chat");

    let raw_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(raw_cookie.contains("HttpOnly"));
    assert!(raw_cookie.contains("Max-Age=604800"));
    assert!(!raw_cookie.contains("Secure"));

    let cookie = session_cookie(&response).unwrap();
    let response = server.get_with_cookie("/session", &cookie).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.username, "dana");
}

#[tokio::test]
async fn test_form_fields_with_reserved_characters() {
    let server = TestServer::start().await.expect("Failed to start server");
    let username = format!("zoë+{}", unique_suffix());
    let password = "p&ss w=rd%+é";

    let response = server
        .post_form("/register", &[("username", username.as_str()), ("password", password)])
        .await
        .unwrap();
    let created: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.username, username);

    let response = server
        .post_form("/login", &[("username", username.as_str()), ("password", password)])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookie = session_cookie(&response).unwrap();
    let response = server.get_with_cookie("/session", &cookie).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.username, username);

    let response = server
        .post_form("/login", &[("username", username.as_str()), ("password", "p&ss w=rd%+")])
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    server.post("/register", &creds).await.unwrap();

    let response = server
        .post("/login", &creds.with_password("wrongpass"))
        .await
        .unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let wrong_password: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.post("/login", &Credentials::unique()).await.unwrap();
    let unknown_user: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(wrong_password.message, "Invalid username or password");
    assert_eq!(wrong_password.message, unknown_user.message);
    assert!(wrong_password.error.is_none());
}

#[tokio::test]
async fn test_session_requires_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/session").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_with_cookie("/session", "jwtToken=garbage")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post("/register", &creds).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/register", &creds).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.post("/login", &creds).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn test_postgres_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
