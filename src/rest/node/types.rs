//! Types for node endpoints.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::serde_helpers::unix_seconds;

/// An frps node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    /// Node ID.
    pub node_id: i64,
    /// Display name.
    pub name: String,
    /// Address frpc connects to.
    pub hostname: String,
    /// Description.
    pub description: String,
    /// frps token.
    pub token: String,
    /// frps bind port.
    pub service_port: i32,
    /// frps dashboard port.
    pub admin_port: i32,
    /// frps dashboard password.
    pub admin_pass: String,
    /// Groups allowed to use the node.
    pub allow_group: String,
    /// Allowed remote port ranges.
    pub allow_port: String,
    /// Allowed proxy types.
    pub allow_type: String,
    /// Region.
    pub region: String,
    /// Advertised bandwidth.
    pub bandwidth: String,
    /// Currently reachable.
    pub is_online: bool,
    /// Disabled by an administrator.
    pub is_disabled: bool,
    /// Total inbound traffic.
    pub total_traffic_in: i64,
    /// Total outbound traffic.
    pub total_traffic_out: i64,
    /// Uptime in seconds.
    pub up_time: i64,
    /// frps version.
    pub version: String,
    /// Donation the node came from, 0 for official nodes.
    pub donate_id: i64,
    /// Donor username.
    pub donate_user: String,
}

/// A node together with its current load, as offered for proxy creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeWithLoad {
    /// The node.
    #[serde(flatten)]
    pub node: Node,
    /// Load percentage.
    #[serde(default)]
    pub load_percent: i32,
}

/// Runtime status of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeStatus {
    /// Node ID.
    pub node_id: i64,
    /// Display name.
    pub name: String,
    /// Total inbound traffic.
    pub total_traffic_in: i64,
    /// Total outbound traffic.
    pub total_traffic_out: i64,
    /// Connected clients.
    pub online_client: i32,
    /// Running proxies.
    pub online_proxy: i32,
    /// Currently reachable.
    pub is_online: bool,
    /// frps version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime: i64,
    /// Current connections.
    pub cur_conns: i32,
    /// Load percentage.
    pub load_percent: i32,
}

/// Credentials needed to connect frpc to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeToken {
    /// frps bind port.
    pub server_port: i32,
    /// frps token.
    pub token: String,
}

/// Address of a node used by at least one of the user's proxies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeConnection {
    /// Node ID.
    pub node_id: i64,
    /// Display name.
    pub name: String,
    /// Address frpc connects to.
    pub hostname: String,
}

impl Node {
    /// Time the node came up, derived from `up_time`.
    pub fn started_at(&self) -> Option<OffsetDateTime> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        unix_seconds(now - self.up_time).filter(|_| self.up_time > 0)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NodeIdRequest {
    pub node_id: i64,
}

/// Query for a free remote port. The proxy type is only sent when non-empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FreePortQuery<'a> {
    pub node_id: i64,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub proxy_type: &'a str,
}
