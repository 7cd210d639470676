//! Types for account endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::types::AccountStatus;
use crate::types::serde_helpers::unix_seconds;

/// The logged-in user.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInfo {
    /// User ID.
    pub user_id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Group name.
    pub group: String,
    /// Display name of the group.
    pub friendly_group: String,
    /// Whether real-name verification is complete.
    pub is_realname: bool,
    /// Number of real-name verification attempts.
    pub realname_times: i32,
    /// Inbound bandwidth limit.
    pub in_bound: i64,
    /// Outbound bandwidth limit.
    pub out_bound: i64,
    /// Maximum number of proxies.
    pub max_proxies: i32,
    /// Proxies in use.
    pub used_proxies: i32,
    /// Registration time (unix seconds).
    pub reg_time: i64,
    /// Raw account status, see [`UserInfo::account_status`].
    pub status: i32,
    /// Ban reason, when banned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_reason: Option<String>,
    /// Whether the daily sign-in was done today.
    pub today_signed: bool,
    /// Remaining traffic.
    pub traffic: i64,
    /// VIP expiry (unix seconds), 0 when not VIP or sent as `null`.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(skip_serializing_if = "crate::types::serde_helpers::is_zero")]
    pub vip_expire_time: i64,
}

impl UserInfo {
    /// Decoded account status.
    pub fn account_status(&self) -> AccountStatus {
        AccountStatus::from(self.status)
    }

    /// Registration time.
    pub fn registered_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.reg_time)
    }

    /// VIP expiry time.
    pub fn vip_expires_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.vip_expire_time)
    }
}

/// A user group and its limits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserGroup {
    /// Internal name.
    pub name: String,
    /// Display name.
    pub friendly_name: String,
    /// Maximum number of proxies.
    pub max_proxies: i32,
    /// Monthly base traffic.
    pub base_traffic: i64,
    /// Outbound bandwidth limit.
    pub out_bound: i64,
    /// Inbound bandwidth limit.
    pub in_bound: i64,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UserGroupsData {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub groups: Vec<UserGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ResetTokenData {
    pub new_token: String,
}

/// Body of captcha-only requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaptchaRequest<'a> {
    pub captcha_token: &'a str,
}

/// Filters for the operation log.
///
/// `page` and `page_size` are always sent; the string filters only when non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLogFilter {
    /// 1-based page number.
    pub page: i32,
    /// Entries per page.
    pub page_size: i32,
    /// Category filter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    /// Status filter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Start of the time range.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    /// End of the time range.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_time: String,
}

impl OperationLogFilter {
    /// Unfiltered listing of one page.
    pub fn page(page: i32, page_size: i32) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Restrict to one category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict to one status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Restrict to a time range.
    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }
}

impl Default for OperationLogFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            category: String::new(),
            status: String::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }
}

/// One operation log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationLog {
    /// Entry ID.
    pub log_id: i64,
    /// Category.
    pub category: String,
    /// Details.
    pub details: String,
    /// Client IP.
    pub ip_address: String,
    /// Result status.
    pub status: String,
    /// Creation time as sent by the server.
    pub created_at: String,
}

/// A page of operation log entries.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationLogList {
    /// Entries on this page.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: Vec<OperationLog>,
    /// Total number of entries.
    pub total: i64,
    /// Current page.
    pub page: i32,
    /// Page size.
    pub page_size: i32,
    /// Total number of pages.
    pub total_pages: i32,
}

/// Operation log counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserLogStats {
    /// Entries this month.
    pub month_count: i64,
    /// Entries today.
    pub today_count: i64,
    /// All entries.
    pub total_count: i64,
    /// Entries this week.
    pub week_count: i64,
}

/// A selectable operation log category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationLogCategory {
    /// Value accepted by [`OperationLogFilter::category`].
    pub value: String,
    /// Display label.
    pub label: String,
}

/// Real-name verification state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RealnameInfo {
    /// Whether verification is complete.
    pub is_realname: bool,
    /// Masked real name.
    pub realname: String,
    /// Masked ID card number.
    pub id_card: String,
    /// Verification attempts used.
    pub realname_times: i32,
}

/// Legacy real-name verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealnameLegacyRequest {
    /// Real name.
    pub realname: String,
    /// ID card number.
    pub id_card: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrafficStatsRequest {
    pub date_period: i32,
}

/// Traffic of one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyTraffic {
    /// Day, as sent by the server.
    pub date: String,
    /// Inbound bytes.
    pub traffic_in: i64,
    /// Outbound bytes.
    pub traffic_out: i64,
}

/// Traffic statistics over a period.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserTrafficStats {
    /// Per-day breakdown.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub daily: Vec<DailyTraffic>,
    /// Inbound total.
    pub total_traffic_in: i64,
    /// Outbound total.
    pub total_traffic_out: i64,
}

/// A domain with a registered ICP filing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IcpDomain {
    /// Domain name.
    pub domain: String,
    /// ICP filing number.
    pub icp: String,
    /// Filing entity.
    pub unit_name: String,
    /// Entity type.
    pub nature_name: String,
    /// Time the domain was added (unix seconds).
    pub add_time: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct DomainRequest<'a> {
    pub domain: &'a str,
}

/// Purchase eligibility of the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseStatus {
    /// Whether purchases are currently allowed.
    pub can_purchase: bool,
    /// Reason when purchases are blocked.
    pub reason: String,
    /// Purchases allowed per month.
    pub monthly_limit: i32,
    /// Purchases made this month.
    pub monthly_used: i32,
}
