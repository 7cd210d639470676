//! ME Frp REST API endpoint constants.

/// Base URL for the ME Frp REST API.
pub const MEFRP_BASE_URL: &str = "https://api.mefrp.com/api";

/// Registration, login and password recovery (no token required).
pub mod auth {
    /// Request a registration email code.
    pub const REGISTER_EMAIL_CODE: &str = "/public/register/emailCode";
    /// Register a new account.
    pub const REGISTER: &str = "/public/register";
    /// Password login.
    pub const LOGIN: &str = "/public/login";
    /// Send a magic login link.
    pub const MAGIC_LINK: &str = "/public/mlogin/link";
    /// Verify a magic login link.
    pub const MAGIC_LINK_VERIFY: &str = "/public/mlogin/verify";
    /// Request a password recovery email code.
    pub const IFORGOT_EMAIL_CODE: &str = "/public/iforgot/emailCode";
    /// Reset a forgotten password.
    pub const IFORGOT: &str = "/public/iforgot";
    /// Change the password of the logged-in user.
    pub const CHANGE_PASSWORD: &str = "/auth/user/passwordReset";
}

/// Account endpoints.
pub mod user {
    /// Current user info.
    pub const INFO: &str = "/auth/user/info";
    /// Daily sign-in.
    pub const SIGN: &str = "/auth/user/sign";
    /// frpc token.
    pub const FRP_TOKEN: &str = "/auth/user/frpToken";
    /// User groups.
    pub const GROUPS: &str = "/auth/user/groups";
    /// Reset the access key.
    pub const TOKEN_RESET: &str = "/auth/user/tokenReset";
    /// Operation log list.
    pub const OPERATION_LOG_LIST: &str = "/auth/operationLog/list";
    /// Operation log statistics.
    pub const OPERATION_LOG_STATS: &str = "/auth/operationLog/stats";
    /// Operation log categories.
    pub const OPERATION_LOG_CATEGORIES: &str = "/auth/operationLog/categories";
    /// Real-name verification status.
    pub const REALNAME_INFO: &str = "/auth/user/info/realname";
    /// Legacy real-name verification.
    pub const REALNAME_LEGACY: &str = "/auth/user/realname/legacy";
    /// Traffic statistics.
    pub const TRAFFIC_STATS: &str = "/auth/user/trafficStats";
    /// Registered ICP domains.
    pub const ICP_DOMAIN_LIST: &str = "/auth/user/icpDomain/list";
    /// Add an ICP domain.
    pub const ICP_DOMAIN_ADD: &str = "/auth/user/icpDomain/add";
    /// Delete an ICP domain.
    pub const ICP_DOMAIN_DELETE: &str = "/auth/user/icpDomain/delete";
    /// Kick every proxy of the user offline.
    pub const KICK_ALL_PROXIES: &str = "/auth/user/kickAllProxies";
    /// Purchase limits.
    pub const PURCHASE_STATUS: &str = "/auth/user/purchase-status";
}

/// Proxy endpoints.
pub mod proxy {
    /// List proxies.
    pub const LIST: &str = "/auth/proxy/list";
    /// Create a proxy.
    pub const CREATE: &str = "/auth/proxy/create";
    /// Update a proxy.
    pub const UPDATE: &str = "/auth/proxy/update";
    /// Delete a proxy.
    pub const DELETE: &str = "/auth/proxy/delete";
    /// Kick a proxy offline.
    pub const KICK: &str = "/auth/proxy/kick";
    /// Enable or disable a proxy.
    pub const TOGGLE: &str = "/auth/proxy/toggle";
    /// Export one proxy's config.
    pub const CONFIG: &str = "/auth/proxy/config";
    /// Export several proxies' config.
    pub const CONFIG_MULTIPLE: &str = "/auth/proxy/config/multiple";
    /// One-click startup parameters.
    pub const EASY_STARTUP: &str = "/auth/easyStartup";
    /// Nodes and groups available when creating a proxy.
    pub const CREATE_PROXY_DATA: &str = "/auth/createProxyData";
}

/// Node endpoints.
pub mod node {
    /// List nodes.
    pub const LIST: &str = "/auth/node/list";
    /// Node runtime status.
    pub const STATUS: &str = "/auth/node/status";
    /// Node secret.
    pub const SECRET: &str = "/auth/node/secret";
    /// Node connection addresses.
    pub const NAME_LIST: &str = "/auth/node/nameList";
    /// Pick a free remote port.
    pub const FREE_PORT: &str = "/auth/node/freePort";
}

/// Node donation endpoints.
pub mod donate {
    /// Apply to donate a node.
    pub const APPLY: &str = "/auth/node/donate";
    /// Donation applications.
    pub const LIST: &str = "/auth/node/donate/list";
    /// Apply to delete a donated node.
    pub const DELETE_APPLY: &str = "/auth/node/donate/delete/apply";
    /// Deletion applications.
    pub const DELETE_LIST: &str = "/auth/node/donate/delete/list";
    /// Apply to edit a donated node.
    pub const EDIT_APPLY: &str = "/auth/node/donate/edit/apply";
    /// Edit applications.
    pub const EDIT_LIST: &str = "/auth/node/donate/edit/list";
    /// Node install script.
    pub const SCRIPT: &str = "/auth/node/donate/script";
}

/// Orders, payment and CDK endpoints.
pub mod cash {
    /// Order history.
    pub const ORDERS: &str = "/auth/orders";
    /// Pay an existing order again.
    pub const REPAY: &str = "/auth/cash/repay";
    /// Submit a new order.
    pub const SUBMIT: &str = "/cash/submit";
    /// Query an order.
    pub const QUERY: &str = "/cash/query";
    /// Fulfil a paid order.
    pub const PROCEED: &str = "/cash/proceed";
    /// Redeem a CDK.
    pub const CDK_REDEEM: &str = "/auth/cdk/redeem";
    /// CDK usage history.
    pub const CDK_USAGE: &str = "/auth/cdk/usage";
}

/// Advertisement endpoints.
pub mod ads {
    /// Ads owned by the user.
    pub const MANAGE: &str = "/auth/ads/manage";
    /// Ads by placement.
    pub const QUERY: &str = "/auth/ads/query";
    /// Add an ad.
    pub const ADD: &str = "/auth/ads/add";
    /// Update an ad.
    pub const UPDATE: &str = "/auth/ads/update";
    /// Apply for an ad.
    pub const APPLY: &str = "/auth/ads/apply";
    /// Delete an ad.
    pub const DELETE: &str = "/auth/ads/delete";
    /// Renew an ad.
    pub const RENEW: &str = "/auth/ads/renew";
    /// Record a click.
    pub const TRACK: &str = "/auth/ads/track";
    /// Available slots.
    pub const SLOTS: &str = "/auth/ads/slots";
    /// Slot by placement.
    pub const SLOT: &str = "/auth/ads/slot";
    /// Ad credits.
    pub const CREDITS: &str = "/auth/ads/credits";
    /// Purchase ad credits.
    pub const CREDITS_PURCHASE: &str = "/auth/ads/credits/purchase";
    /// Ad statistics.
    pub const STATS: &str = "/auth/ads/stats";
    /// Validate a coupon.
    pub const COUPON_VALIDATE: &str = "/auth/ads/coupon/validate";
    /// Ads by placement, anonymous.
    pub const PUBLIC_QUERY: &str = "/public/ads/query";
}

/// Public information and system endpoints.
pub mod public {
    /// Platform statistics.
    pub const STATISTICS: &str = "/public/statistics";
    /// Store products.
    pub const STORE_PRODUCTS: &str = "/public/store/products";
    /// Holiday calendar.
    pub const HOLIDAY: &str = "/public/holiday";
    /// Software update check.
    pub const CHECK_UPDATE: &str = "/public/checkUpdate";
    /// Download mirrors.
    pub const DOWNLOAD_SOURCES: &str = "/auth/downloadSources";
    /// Downloadable products.
    pub const PRODUCTS: &str = "/auth/products";
    /// System status.
    pub const SYSTEM_STATUS: &str = "/auth/system/status";
    /// Popup notice.
    pub const POPUP_NOTICE: &str = "/auth/popupNotice";
    /// Notice board.
    pub const NOTICE: &str = "/auth/notice";
}
