//! Types for advertisement endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::types::serde_helpers::{is_zero, unix_seconds};

/// An advertisement.
///
/// The same record is sent to add, update and apply; server-managed fields
/// such as counters and review data are ignored on submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ads {
    /// Ad ID.
    pub ads_id: i64,
    /// Owner username.
    pub ads_owner: String,
    /// Click-through URL.
    pub ads_url: String,
    /// Ad kind, e.g. `text` or `image`.
    pub ads_type: String,
    /// Text content.
    pub ads_content: String,
    /// Image URL.
    pub ads_image_url: String,
    /// Start of the display period (unix seconds).
    pub ads_start_time: i64,
    /// End of the display period (unix seconds).
    pub ads_expire: i64,
    /// Price of one renewal.
    #[serde(with = "rust_decimal::serde::float")]
    pub renewal_price: Decimal,
    /// Placement key.
    pub ads_placement: String,
    /// Recorded clicks.
    pub ads_click: i64,
    /// Recorded impressions.
    pub ads_impression: i64,
    /// Raw review status.
    pub ads_status: i32,
    /// Reviewer note.
    pub ads_review_note: String,
    /// Reviewer.
    pub ads_reviewer: String,
    /// Review time (unix seconds).
    pub ads_review_time: i64,
    /// Slot the ad occupies.
    pub ads_slot_id: i64,
    /// Creation time (unix seconds).
    pub ads_created_time: i64,
}

impl Ads {
    /// End of the display period.
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.ads_expire)
    }

    /// Whether the display period has ended at `now`.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at().is_some_and(|expiry| expiry <= now)
    }
}

/// Query for ads by placement. Empty or zero parameters are not sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdsQuery<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    pub placement: &'a str,
    #[serde(skip_serializing_if = "is_zero")]
    pub slot_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlacementQuery<'a> {
    pub placement: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdsIdRequest {
    pub ads_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackQuery {
    pub ad_id: i64,
}

/// A place on the site where ads are shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdSlot {
    /// Slot ID.
    pub slot_id: i64,
    /// Display name.
    pub name: String,
    /// Placement key.
    pub placement: String,
    /// Description.
    pub description: String,
    /// Maximum concurrent ads.
    pub max_ads: i32,
    /// Price of one credit.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Display period bought by one credit, in days.
    pub duration: i32,
    /// Whether the slot accepts new ads.
    pub enabled: bool,
}

/// A slot together with its current occupancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSlotWithUsage {
    /// The slot.
    #[serde(flatten)]
    pub slot: AdSlot,
    /// Ads currently shown in the slot.
    #[serde(default)]
    pub used_count: i32,
    /// Free places left.
    #[serde(default)]
    pub available: i32,
}

/// Ad credits the user holds for one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCredit {
    /// Credit record ID.
    pub credit_id: i64,
    /// Owner ID.
    pub user_id: i64,
    /// Owner username.
    pub username: String,
    /// Slot the credits apply to.
    pub slot_id: i64,
    /// Slot display name, when the server includes it.
    pub slot_name: Option<String>,
    /// Credits bought.
    pub total: i32,
    /// Credits spent.
    pub used: i32,
    /// Last update (unix seconds).
    pub update_time: i64,
    /// Expiry (unix seconds).
    pub expire_time: i64,
}

impl AdCredit {
    /// Credits left to spend.
    pub fn remaining(&self) -> i32 {
        (self.total - self.used).max(0)
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdCreditsData {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub credits: Vec<AdCredit>,
}

/// Aggregate ad counters of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdsStats {
    /// All ads.
    pub total_ads: i64,
    /// Ads currently shown.
    pub active_ads: i64,
    /// Ads awaiting review.
    pub pending_ads: i64,
    /// Clicks across all ads.
    pub total_clicks: i64,
    /// Impressions across all ads.
    pub total_impressions: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateCouponRequest<'a> {
    pub code: &'a str,
    pub product_type: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub order_amount: Decimal,
}

/// Outcome of a coupon check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateCouponResponse {
    /// Whether the coupon applies.
    pub valid: bool,
    /// Discount granted.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Amount due after the discount.
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
    /// Explanation when the coupon does not apply.
    pub message: String,
}

/// Purchase payload. The server reads `slot_id` in snake case.
#[derive(Debug, Serialize)]
pub(crate) struct PurchaseCreditsRequest {
    pub slot_id: i64,
    pub amount: i32,
}

/// Result of buying ad credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCreditPurchase {
    /// Credit balance for the slot after the purchase.
    pub credits: i32,
    /// Credits bought by this purchase.
    pub purchased: i32,
    /// Amount charged.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}
