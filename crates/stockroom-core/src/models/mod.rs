//! Data models for backend entities.
//!
//! This module contains the data structures exchanged with the backend:
//!
//! - `User`: the account record returned by login, registration, and `/users/me`
//! - `Product`: a server-owned product record
//! - `NewProduct`, `ProductUpdate`: client-supplied create/update payloads,
//!   validated before any request is sent

pub mod product;
pub mod user;

pub use product::{InvalidProduct, NewProduct, Product, ProductUpdate};
pub use user::User;
