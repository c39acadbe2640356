use serde::{Deserialize, Serialize};

/// A user account as returned by the backend.
///
/// The cached copy stored alongside the bearer token uses the same shape,
/// so this type is both a wire model and persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Not returned for regular accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
