//! Account endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::user;
use crate::types::envelope::TokenData;

impl MeFrpClient {
    /// Get the logged-in user's information.
    pub async fn get_user_info(&self) -> Result<UserInfo, MeFrpError> {
        self.get(user::INFO).await?.into_data()
    }

    /// Perform the daily sign-in.
    pub async fn sign(&self, captcha_token: &str) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(user::SIGN, &CaptchaRequest { captcha_token })
            .await?
            .into_unit()
    }

    /// Get the token frpc uses to authenticate against nodes.
    pub async fn get_user_frp_token(&self) -> Result<String, MeFrpError> {
        let data: TokenData = self.get(user::FRP_TOKEN).await?.into_data()?;
        Ok(data.token)
    }

    /// List user groups and their limits.
    pub async fn get_user_groups(&self) -> Result<Vec<UserGroup>, MeFrpError> {
        let data: UserGroupsData = self.get(user::GROUPS).await?.into_data()?;
        Ok(data.groups)
    }

    /// Reset the access key and return the new one.
    pub async fn reset_access_key(&self, captcha_token: &str) -> Result<String, MeFrpError> {
        let data: ResetTokenData = self
            .post(user::TOKEN_RESET, &CaptchaRequest { captcha_token })
            .await?
            .into_data()?;
        Ok(data.new_token)
    }

    /// List operation log entries.
    pub async fn get_user_logs(
        &self,
        filter: &OperationLogFilter,
    ) -> Result<OperationLogList, MeFrpError> {
        self.get_with_query(user::OPERATION_LOG_LIST, filter)
            .await?
            .into_data()
    }

    /// Get operation log counters.
    pub async fn get_user_log_stats(&self) -> Result<UserLogStats, MeFrpError> {
        self.get(user::OPERATION_LOG_STATS).await?.into_data()
    }

    /// List the categories accepted by [`OperationLogFilter::category`].
    pub async fn get_operation_log_categories(
        &self,
    ) -> Result<Vec<OperationLogCategory>, MeFrpError> {
        self.get(user::OPERATION_LOG_CATEGORIES).await?.into_data()
    }

    /// Get the real-name verification state.
    pub async fn get_realname_info(&self) -> Result<RealnameInfo, MeFrpError> {
        self.get(user::REALNAME_INFO).await?.into_data()
    }

    /// Submit a legacy real-name verification.
    pub async fn perform_realname_legacy(
        &self,
        request: &RealnameLegacyRequest,
    ) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(user::REALNAME_LEGACY, request)
            .await?
            .into_unit()
    }

    /// Get traffic statistics for the last `date_period` days.
    pub async fn get_user_traffic_stats(
        &self,
        date_period: i32,
    ) -> Result<UserTrafficStats, MeFrpError> {
        self.post(user::TRAFFIC_STATS, &TrafficStatsRequest { date_period })
            .await?
            .into_data()
    }

    /// List domains with a registered ICP filing.
    pub async fn get_user_icp_domains(&self) -> Result<Vec<IcpDomain>, MeFrpError> {
        self.get(user::ICP_DOMAIN_LIST).await?.into_data()
    }

    /// Register an ICP domain.
    pub async fn add_icp_domain(&self, domain: &str) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(user::ICP_DOMAIN_ADD, &DomainRequest { domain })
            .await?
            .into_unit()
    }

    /// Remove an ICP domain.
    pub async fn delete_icp_domain(&self, domain: &str) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(user::ICP_DOMAIN_DELETE, &DomainRequest { domain })
            .await?
            .into_unit()
    }

    /// Kick every proxy of the user offline.
    pub async fn kick_all_proxies(&self) -> Result<(), MeFrpError> {
        self.get::<serde_json::Value>(user::KICK_ALL_PROXIES)
            .await?
            .into_unit()
    }

    /// Get purchase limits.
    pub async fn get_purchase_status(&self) -> Result<PurchaseStatus, MeFrpError> {
        self.get(user::PURCHASE_STATUS).await?.into_data()
    }
}
