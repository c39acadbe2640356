//! API client for communicating with the product backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests for login, registration, and product CRUD.

use anyhow::Context;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::auth::{Session, SessionData};
use crate::models::{NewProduct, Product, ProductUpdate, User};

use super::ApiError;

/// Payload returned by the login endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// API client for the product backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
///
/// The bearer token is explicit state: it is set from a restored or freshly
/// acquired session via `set_session` and dropped via `clear_session`. The
/// client never reads storage on its own. No timeout is configured; each
/// operation waits on the transport's defaults.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach the bearer token from a session.
    pub fn set_session(&mut self, session: &SessionData) {
        self.token = Some(session.token.clone());
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_session(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request against the backend, attaching the current bearer
    /// token if one is set. The token is read here, immediately before the
    /// request is sent - never cached across requests.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Read a response body and decode it, keeping transport and shape
    /// failures distinct.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &str,
    ) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("Failed to parse {} response: {}", what, e)))
    }

    // ===== Authentication =====

    /// Log in with email and password.
    ///
    /// Returns the new session on success. The caller persists it and
    /// attaches it via `set_session`; login itself has no side effects on
    /// the client or on storage.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionData, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self
            .request(Method::POST, "/users/login")
            .json(&body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let login: LoginResponse = Self::decode(response, "login").await?;

        debug!(user_id = login.user.id, "Login succeeded");
        Ok(SessionData {
            token: login.token,
            user: login.user,
        })
    }

    /// Register a new account. Does not log the user in; callers follow up
    /// with `login` once registration succeeds.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        let response = self
            .request(Method::POST, "/users/register")
            .json(&body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::decode(response, "register").await
    }

    /// Fetch the account behind the current token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self.request(Method::GET, "/users/me").send().await?;
        let response = Self::check_response(response).await?;
        Self::decode(response, "current user").await
    }

    /// End the session. The server call is best-effort: the in-memory token
    /// and the persisted session are cleared even when the server rejects
    /// the call or is unreachable. Only a local storage failure is an error.
    pub async fn logout(&mut self, session: &mut Session) -> anyhow::Result<()> {
        match self.request(Method::GET, "/users/logout").send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Server logout acknowledged");
            }
            Ok(response) => {
                warn!(status = %response.status(), "Server logout rejected, clearing local session anyway");
            }
            Err(err) => {
                warn!(error = %err, "Server logout failed, clearing local session anyway");
            }
        }

        self.token = None;
        session.clear().context("Failed to clear persisted session")
    }

    // ===== Products =====

    /// Fetch the product list.
    ///
    /// A 200 response whose body is not the expected shape decodes to an
    /// empty list rather than an error; list screens rely on getting an
    /// empty sequence instead of an exception on malformed payloads.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.request(Method::GET, "/products").send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        debug!("Products response received");
        Ok(Self::parse_products(&text))
    }

    /// Create a product. The payload must already have passed
    /// `NewProduct::validate`; the client sends it as-is.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let response = self
            .request(Method::POST, "/products")
            .json(product)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Self::parse_product(&text)
    }

    /// Update the mutable fields of a product. Absent fields are left out
    /// of the request body. The payload must already have passed
    /// `ProductUpdate::validate`.
    pub async fn update_product(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let response = self
            .request(Method::PUT, &format!("/products/{}", id))
            .json(update)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Self::parse_product(&text)
    }

    /// Delete a product. The server's status is surfaced as-is; deleting an
    /// id that no longer exists fails with `ApiError::NotFound`.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/products/{}", id))
            .send()
            .await?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// Parse a products payload. The expected shape is `{"products": [...]}`;
    /// a bare array is accepted, and anything else degrades to empty.
    fn parse_products(text: &str) -> Vec<Product> {
        #[derive(Deserialize)]
        struct ProductsWrapper {
            #[serde(default)]
            products: Vec<Product>,
        }

        if let Ok(wrapper) = serde_json::from_str::<ProductsWrapper>(text) {
            return wrapper.products;
        }

        if let Ok(products) = serde_json::from_str::<Vec<Product>>(text) {
            return products;
        }

        warn!("Unrecognized products payload, treating as empty");
        vec![]
    }

    /// Parse a single product that may arrive bare or wrapped.
    fn parse_product(text: &str) -> Result<Product, ApiError> {
        if let Ok(product) = serde_json::from_str::<Product>(text) {
            return Ok(product);
        }

        #[derive(Deserialize)]
        struct ProductWrapper {
            #[serde(alias = "data")]
            product: Product,
        }

        serde_json::from_str::<ProductWrapper>(text)
            .map(|wrapper| wrapper.product)
            .map_err(|e| ApiError::Decode(format!("Failed to parse product response: {}", e)))
    }
}
