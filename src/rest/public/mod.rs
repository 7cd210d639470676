//! Public information and system endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::public;

impl MeFrpClient {
    /// Platform-wide counters.
    pub async fn get_statistics(&self) -> Result<Statistics, MeFrpError> {
        self.get(public::STATISTICS).await?.into_data()
    }

    /// Products sold in the store.
    pub async fn get_store_items(&self) -> Result<Vec<StoreItem>, MeFrpError> {
        self.get(public::STORE_PRODUCTS).await?.into_data()
    }

    /// Holiday dates of `year`.
    pub async fn get_holiday_data(&self, year: i32) -> Result<Vec<String>, MeFrpError> {
        self.get_with_query(public::HOLIDAY, &HolidayQuery { year })
            .await?
            .into_data()
    }

    /// Ask whether a newer build of a product exists.
    pub async fn check_update(
        &self,
        request: &CheckUpdateRequest,
    ) -> Result<CheckUpdateResponse, MeFrpError> {
        self.post(public::CHECK_UPDATE, request).await?.into_data()
    }

    /// Download mirrors.
    pub async fn get_download_sources(&self) -> Result<Vec<DownloadSource>, MeFrpError> {
        self.get(public::DOWNLOAD_SOURCES).await?.into_data()
    }

    /// Downloadable builds.
    pub async fn get_products(&self) -> Result<Vec<Product>, MeFrpError> {
        self.get(public::PRODUCTS).await?.into_data()
    }

    /// Current service health.
    pub async fn get_system_status(&self) -> Result<SystemStatus, MeFrpError> {
        self.get(public::SYSTEM_STATUS).await?.into_data()
    }

    /// The important popup notice, empty when there is none.
    pub async fn get_popup_notice(&self) -> Result<String, MeFrpError> {
        self.get(public::POPUP_NOTICE).await?.into_data()
    }

    /// The notice board text.
    pub async fn get_notice(&self) -> Result<String, MeFrpError> {
        self.get(public::NOTICE).await?.into_data()
    }
}
