//! Core library for stockroom - the session and product client used by the
//! app shells.
//!
//! The crate owns the locally persisted session (bearer token plus a cached
//! copy of the user it belongs to) and exposes typed operations for login,
//! registration, logout, and product CRUD against a single backend origin.
//! UI shells drive it one operation at a time and render the settled result.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{Session, SessionData};
pub use config::Config;
pub use models::{InvalidProduct, NewProduct, Product, ProductUpdate, User};
