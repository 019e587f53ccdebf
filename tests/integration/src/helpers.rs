//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chatdoor_api::{build_app_state, create_app, create_app_state, AppState};
use chatdoor_common::{AppConfig, SessionIssuer};
use chatdoor_db::InMemoryUserRepository;
use reqwest::{header, redirect, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Static pages shipped with the repository
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public");

/// Signing secret used by servers backed by the in-memory directory
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by an in-memory user directory
    pub async fn start() -> Result<Self> {
        let config = in_memory_config()?;
        let issuer = SessionIssuer::new(TEST_SECRET, config.jwt.token_expiry)?;
        let state = build_app_state(config, Arc::new(InMemoryUserRepository::new()), issuer)?;
        Self::start_with_state(state).await
    }

    /// Start a server against the PostgreSQL database from the environment
    pub async fn start_postgres() -> Result<Self> {
        let mut config = test_config()?;
        config.static_files.dir = STATIC_DIR.to_string();
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    /// Serve a prepared state on an ephemeral port
    pub async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Redirects stay visible so tests can read Location and Set-Cookie
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request carrying a cookie
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(header::COOKIE, cookie)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a URL-encoded form body
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).form(fields).send().await?)
    }
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Configuration for a server that never touches a database
pub fn in_memory_config() -> Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DATABASE_URL", "postgres://unused/integration".to_string()),
        ("STATIC_DIR", STATIC_DIR.to_string()),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if the PostgreSQL test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET_KEY").is_err() {
        eprintln!("Skipping test: JWT_SECRET_KEY not set");
        return false;
    }

    true
}

/// The `name=value` pair of the first Set-Cookie header
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|pair| pair.trim().to_string())
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
