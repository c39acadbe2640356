//! REST API client module for the product backend.
//!
//! This module provides the `ApiClient` for authentication and product
//! CRUD against a single backend origin.
//!
//! The API uses bearer token authentication; the token is obtained through
//! the login endpoint and attached to every subsequent request until the
//! session is cleared.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
