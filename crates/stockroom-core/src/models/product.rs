//! Product models and the client-side input checks applied before a
//! create or update request is issued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product record as returned by the backend.
///
/// `id`, `owner_id`, and the timestamps are assigned server-side and are
/// never included in create or update payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields the client supplies when creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

/// Partial update payload. Absent fields are left out of the request body
/// entirely, so the server keeps their current values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Client-side rejection of product input. Raised before any request is
/// sent; the backend's own validation surfaces separately as an API error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidProduct {
    #[error("Name is required")]
    MissingName,

    #[error("Price must be a valid positive number")]
    NonPositivePrice,

    #[error("Price must be a finite number")]
    NonFinitePrice,
}

fn check_price(price: f64) -> Result<(), InvalidProduct> {
    if !price.is_finite() {
        return Err(InvalidProduct::NonFinitePrice);
    }
    if price <= 0.0 {
        return Err(InvalidProduct::NonPositivePrice);
    }
    Ok(())
}

impl NewProduct {
    /// Validate the payload. Must pass before `ApiClient::create_product`
    /// is invoked; the client sends the payload as-is.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if self.name.trim().is_empty() {
            return Err(InvalidProduct::MissingName);
        }
        check_price(self.price)
    }
}

impl ProductUpdate {
    /// Validate whichever fields are present. An empty update is allowed.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if let Some(ref name) = self.name {
            if name.trim().is_empty() {
                return Err(InvalidProduct::MissingName);
            }
        }
        match self.price {
            Some(price) => check_price(price),
            None => Ok(()),
        }
    }
}
