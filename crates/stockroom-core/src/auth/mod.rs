//! Session management for the authenticated API.
//!
//! This module provides:
//! - `SessionData`: the persisted token/user pair
//! - `Session`: durable storage for it, restored at process start
//!
//! Sessions are persisted to disk until logout. Credentials themselves are
//! never written anywhere; only the bearer token and the user record it
//! was issued for.

pub mod session;

pub use session::{Session, SessionData};
