//! Types for public information and system endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::ServiceState;
use crate::types::serde_helpers::unix_seconds;

/// Platform-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Registered users.
    pub users: i64,
    /// Nodes.
    pub nodes: i64,
    /// Proxies.
    pub proxies: i64,
    /// Traffic served, in bytes.
    pub traffic: i64,
}

/// A product offered in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreItem {
    /// Product type, used as `type` when submitting an order.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Display name.
    pub name: String,
    /// List price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Unit the price applies to.
    pub unit: String,
    /// Description.
    pub description: String,
    /// Whether the product can be bought.
    pub enabled: bool,
    /// Whether a discount is configured.
    pub discount_enabled: bool,
    /// Discounted price.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_price: Decimal,
    /// Discount start (unix seconds).
    pub discount_start_time: i64,
    /// Discount end (unix seconds).
    pub discount_end_time: i64,
    /// Price charged right now.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_price: Decimal,
    /// Whether the discount is in effect right now.
    pub is_discount_active: bool,
    /// Seconds until the discount ends.
    pub discount_remaining_seconds: i64,
}

impl StoreItem {
    /// End of the discount window.
    pub fn discount_ends_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.discount_end_time)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct HolidayQuery {
    pub year: i32,
}

/// Parameters of an update check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckUpdateRequest {
    /// Product being checked.
    pub product_id: String,
    /// Installed version.
    pub current_version: String,
    /// Operating system.
    pub system: String,
    /// Architecture.
    pub arch: String,
}

impl CheckUpdateRequest {
    /// Check `product_id` at `current_version` for the given platform.
    pub fn new(
        product_id: impl Into<String>,
        current_version: impl Into<String>,
        system: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            current_version: current_version.into(),
            system: system.into(),
            arch: arch.into(),
        }
    }
}

/// Result of an update check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckUpdateResponse {
    /// Whether a newer version exists.
    pub has_update: bool,
    /// Newest version.
    pub latest_version: String,
    /// Download path of the newest version.
    pub download_url: String,
    /// Release notes.
    pub changelog: String,
    /// Whether the update must be installed.
    pub force_update: bool,
}

/// A download mirror.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSource {
    /// Mirror ID.
    pub id: i64,
    /// Base path, joined with [`Product::path`].
    pub path: String,
    /// Display name.
    pub name: String,
}

/// A downloadable build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub product_id: String,
    /// Operating system.
    pub system: String,
    /// Architecture.
    pub arch: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub desc: String,
    /// Path relative to a download source.
    pub path: String,
    /// Version.
    pub version: String,
    /// Listed publicly.
    pub is_public: bool,
}

impl Product {
    /// Full download URL through `source`.
    pub fn download_url(&self, source: &DownloadSource) -> String {
        format!(
            "{}/{}",
            source.path.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Service health as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    /// Raw state, see [`SystemStatus::state`].
    pub status: i32,
    /// Operator remark.
    pub remark: String,
}

impl SystemStatus {
    /// Decoded service state.
    pub fn state(&self) -> ServiceState {
        ServiceState::from(self.status)
    }
}
