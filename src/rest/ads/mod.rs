//! Advertisement endpoints.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::ads;

impl MeFrpClient {
    /// List ads owned by the user.
    pub async fn get_user_ads(&self) -> Result<Vec<Ads>, MeFrpError> {
        self.get(ads::MANAGE).await?.into_data()
    }

    /// List ads shown at a placement.
    ///
    /// An empty `placement` or a zero `slot_id` is left out of the query.
    pub async fn get_ads_by_placement(
        &self,
        placement: &str,
        slot_id: i64,
    ) -> Result<Vec<Ads>, MeFrpError> {
        self.get_with_query(ads::QUERY, &AdsQuery { placement, slot_id })
            .await?
            .into_data()
    }

    /// Add an ad.
    pub async fn add_ad(&self, ad: &Ads) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(ads::ADD, ad)
            .await?
            .into_unit()
    }

    /// Update an ad.
    pub async fn update_ad(&self, ad: &Ads) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(ads::UPDATE, ad)
            .await?
            .into_unit()
    }

    /// Submit an ad for review.
    pub async fn apply_ad(&self, ad: &Ads) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(ads::APPLY, ad)
            .await?
            .into_unit()
    }

    /// Delete an ad.
    pub async fn delete_ad(&self, ads_id: i64) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(ads::DELETE, &AdsIdRequest { ads_id })
            .await?
            .into_unit()
    }

    /// Extend the display period of an ad.
    pub async fn renew_ad(&self, ads_id: i64) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(ads::RENEW, &AdsIdRequest { ads_id })
            .await?
            .into_unit()
    }

    /// Record a click on an ad.
    pub async fn track_ad_click(&self, ads_id: i64) -> Result<(), MeFrpError> {
        self.get_with_query::<serde_json::Value, _>(ads::TRACK, &TrackQuery { ad_id: ads_id })
            .await?
            .into_unit()
    }

    /// List slots with their occupancy.
    pub async fn get_available_ad_slots(&self) -> Result<Vec<AdSlotWithUsage>, MeFrpError> {
        self.get(ads::SLOTS).await?.into_data()
    }

    /// List the user's ad credits.
    pub async fn get_user_ad_credits(&self) -> Result<Vec<AdCredit>, MeFrpError> {
        let data: AdCreditsData = self.get(ads::CREDITS).await?.into_data()?;
        Ok(data.credits)
    }

    /// Aggregate counters over the user's ads.
    pub async fn get_user_ads_stats(&self) -> Result<AdsStats, MeFrpError> {
        self.get(ads::STATS).await?.into_data()
    }

    /// Look up the slot at a placement.
    pub async fn get_ad_slot_by_placement(&self, placement: &str) -> Result<AdSlot, MeFrpError> {
        self.get_with_query(ads::SLOT, &PlacementQuery { placement })
            .await?
            .into_data()
    }

    /// Check a coupon against an order amount.
    pub async fn validate_coupon(
        &self,
        code: &str,
        product_type: &str,
        order_amount: Decimal,
    ) -> Result<ValidateCouponResponse, MeFrpError> {
        let request = ValidateCouponRequest {
            code,
            product_type,
            order_amount,
        };
        self.post(ads::COUPON_VALIDATE, &request).await?.into_data()
    }

    /// Buy credits for a slot.
    pub async fn purchase_ad_credits(
        &self,
        slot_id: i64,
        amount: i32,
    ) -> Result<AdCreditPurchase, MeFrpError> {
        self.post(ads::CREDITS_PURCHASE, &PurchaseCreditsRequest { slot_id, amount })
            .await?
            .into_data()
    }

    /// List ads at a placement without authentication.
    pub async fn get_public_ads_by_placement(
        &self,
        placement: &str,
    ) -> Result<Vec<Ads>, MeFrpError> {
        self.get_with_query(ads::PUBLIC_QUERY, &PlacementQuery { placement })
            .await?
            .into_data()
    }
}
