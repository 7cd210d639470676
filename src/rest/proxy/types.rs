//! Types for proxy endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};
use time::OffsetDateTime;

use crate::rest::node::{NodeConnection, NodeWithLoad};
use crate::rest::user::UserGroup;
use crate::types::ConfigFormat;
use crate::types::serde_helpers::unix_seconds;

/// A proxy (tunnel) owned by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Proxy {
    /// Proxy ID.
    pub proxy_id: i64,
    /// Owner.
    pub username: String,
    /// Name, unique per user.
    pub proxy_name: String,
    /// `tcp`, `udp`, `http`, `https`, ...
    pub proxy_type: String,
    /// Banned by an administrator.
    pub is_banned: bool,
    /// Disabled by the user.
    pub is_disabled: bool,
    /// Local address frpc forwards to.
    #[serde(rename = "localIp")]
    pub local_ip: String,
    /// Local port.
    pub local_port: i32,
    /// Port exposed on the node.
    pub remote_port: i32,
    /// Node the proxy runs on.
    pub node_id: i64,
    /// frpc run ID of the current session.
    pub run_id: String,
    /// Currently connected.
    pub is_online: bool,
    /// Bound domain for HTTP(S) proxies.
    pub domain: String,
    /// Last start (unix seconds).
    pub last_start_time: i64,
    /// Last stop (unix seconds).
    pub last_close_time: i64,
    /// frpc version of the last session.
    pub client_version: String,
    /// PROXY protocol version, empty when disabled.
    pub proxy_protocol_version: String,
    /// Encrypt traffic between frpc and the node.
    pub use_encryption: bool,
    /// Compress traffic between frpc and the node.
    pub use_compression: bool,
    /// URL locations for HTTP proxies.
    #[serde(alias = "locations")]
    pub location: String,
    /// Visitor access key for STCP/XTCP.
    pub access_key: String,
    /// Host header rewrite.
    pub host_header_rewrite: String,
    /// `X-From-Where` header value.
    pub header_x_from_where: String,
    /// frpc HTTP plugin.
    pub http_plugin: String,
    /// Certificate path for the HTTPS plugin.
    pub crt_path: String,
    /// Key path for the HTTPS plugin.
    pub key_path: String,
    /// Extra request headers.
    pub request_headers: String,
    /// Extra response headers.
    pub response_headers: String,
    /// HTTP basic auth user.
    pub http_user: String,
    /// HTTP basic auth password.
    pub http_password: String,
    /// Transport protocol between frpc and the node.
    pub transport_protocol: String,
}

impl Proxy {
    /// Last start time.
    pub fn last_started_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.last_start_time)
    }

    /// Last stop time.
    pub fn last_closed_at(&self) -> Option<OffsetDateTime> {
        unix_seconds(self.last_close_time)
    }
}

/// Proxies of the user together with the nodes they run on.
///
/// Older servers answer with a bare array of proxies, newer ones with
/// `{proxies, nodes}`; both decode into this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProxyListShape")]
pub struct ProxyList {
    /// Proxies.
    pub proxies: Vec<Proxy>,
    /// Connection addresses of the nodes used by `proxies`.
    pub nodes: Vec<NodeConnection>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProxyListShape {
    Bare(Vec<Proxy>),
    Full {
        #[serde(default)]
        proxies: Option<Vec<Proxy>>,
        #[serde(default)]
        nodes: Option<Vec<NodeConnection>>,
    },
}

impl From<ProxyListShape> for ProxyList {
    fn from(shape: ProxyListShape) -> Self {
        match shape {
            ProxyListShape::Bare(proxies) => ProxyList {
                proxies,
                nodes: Vec::new(),
            },
            ProxyListShape::Full { proxies, nodes } => ProxyList {
                proxies: proxies.unwrap_or_default(),
                nodes: nodes.unwrap_or_default(),
            },
        }
    }
}

/// Request to create a proxy.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProxyRequest {
    /// Name, unique per user.
    pub proxy_name: String,
    /// Proxy type.
    pub proxy_type: String,
    /// Local address.
    #[serde(rename = "localIp")]
    pub local_ip: String,
    /// Local port.
    pub local_port: i32,
    /// Remote port on the node.
    pub remote_port: i32,
    /// Target node.
    pub node_id: i64,
    /// Domain for HTTP(S) proxies.
    pub domain: Option<String>,
    /// PROXY protocol version.
    pub proxy_protocol_version: Option<String>,
    /// Encrypt traffic.
    pub use_encryption: bool,
    /// Compress traffic.
    pub use_compression: bool,
    /// Host header rewrite.
    pub host_header_rewrite: Option<String>,
    /// `X-From-Where` header value.
    pub header_x_from_where: Option<String>,
}

impl CreateProxyRequest {
    /// A proxy forwarding `local_ip:local_port` to `remote_port` on `node_id`.
    pub fn new(
        proxy_name: impl Into<String>,
        proxy_type: impl Into<String>,
        local_ip: impl Into<String>,
        local_port: i32,
        remote_port: i32,
        node_id: i64,
    ) -> Self {
        Self {
            proxy_name: proxy_name.into(),
            proxy_type: proxy_type.into(),
            local_ip: local_ip.into(),
            local_port,
            remote_port,
            node_id,
            ..Self::default()
        }
    }

    /// Bind a domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Request to update a proxy.
///
/// Optional string fields are sent as `null` when unset, which leaves the
/// stored value cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProxyRequest {
    /// Proxy to update.
    pub proxy_id: i64,
    /// Name.
    pub proxy_name: String,
    /// Proxy type.
    pub proxy_type: String,
    /// Local address.
    #[serde(rename = "localIp")]
    pub local_ip: String,
    /// Local port.
    pub local_port: i64,
    /// Remote port.
    pub remote_port: i64,
    /// Node.
    pub node_id: i64,
    /// Domain.
    pub domain: Option<String>,
    /// `X-From-Where` header value.
    pub header_x_from_where: Option<String>,
    /// Host header rewrite.
    pub host_header_rewrite: Option<String>,
    /// PROXY protocol version.
    pub proxy_protocol_version: Option<String>,
    /// Encrypt traffic.
    pub use_encryption: bool,
    /// Compress traffic.
    pub use_compression: bool,
}

impl From<&Proxy> for UpdateProxyRequest {
    fn from(proxy: &Proxy) -> Self {
        fn non_empty(s: &str) -> Option<String> {
            (!s.is_empty()).then(|| s.to_string())
        }
        Self {
            proxy_id: proxy.proxy_id,
            proxy_name: proxy.proxy_name.clone(),
            proxy_type: proxy.proxy_type.clone(),
            local_ip: proxy.local_ip.clone(),
            local_port: proxy.local_port.into(),
            remote_port: proxy.remote_port.into(),
            node_id: proxy.node_id,
            domain: non_empty(&proxy.domain),
            header_x_from_where: non_empty(&proxy.header_x_from_where),
            host_header_rewrite: non_empty(&proxy.host_header_rewrite),
            proxy_protocol_version: non_empty(&proxy.proxy_protocol_version),
            use_encryption: proxy.use_encryption,
            use_compression: proxy.use_compression,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProxyIdRequest {
    pub proxy_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToggleProxyRequest {
    pub proxy_id: i64,
    pub is_disabled: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProxyConfigRequest {
    pub proxy_id: i64,
    pub format: ConfigFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MultipleConfigRequest<'a> {
    pub proxy_ids: &'a [i64],
    pub format: ConfigFormat,
}

/// Exported frpc configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Configuration file contents.
    pub config: String,
    /// Format of `config`.
    #[serde(rename = "type")]
    pub format: String,
}

/// Everything frpc needs to start one proxy without a config file.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EasyStartProxy {
    /// Proxy ID.
    pub proxy_id: i64,
    /// Owner.
    pub username: String,
    /// Name.
    pub proxy_name: String,
    /// Proxy type.
    pub proxy_type: String,
    /// Banned by an administrator.
    pub is_banned: bool,
    /// Disabled by the user.
    pub is_disabled: bool,
    /// Local address.
    #[serde(rename = "localIp")]
    pub local_ip: String,
    /// Local port.
    pub local_port: i32,
    /// Remote port.
    pub remote_port: i32,
    /// frpc run ID.
    pub run_id: String,
    /// Currently connected.
    pub is_online: bool,
    /// Bound domain.
    pub domain: String,
    /// Last start (unix seconds).
    pub last_start_time: i64,
    /// Last stop (unix seconds).
    pub last_close_time: i64,
    /// frpc version.
    pub client_version: String,
    /// PROXY protocol version.
    pub proxy_protocol_version: String,
    /// Encrypt traffic.
    pub use_encryption: bool,
    /// Compress traffic.
    pub use_compression: bool,
    /// URL locations.
    #[serde(alias = "locations")]
    pub location: String,
    /// Visitor access key.
    pub access_key: String,
    /// Host header rewrite.
    pub host_header_rewrite: String,
    /// frpc HTTP plugin.
    pub http_plugin: String,
    /// Certificate path.
    pub crt_path: String,
    /// Key path.
    pub key_path: String,
    /// Extra request headers.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub request_headers: HashMap<String, String>,
    /// HTTP basic auth user.
    pub http_user: String,
    /// HTTP basic auth password.
    pub http_password: String,
    /// Node address frpc connects to.
    pub node_addr: String,
    /// Node frps port.
    pub node_port: i32,
    /// Node frps token.
    pub node_token: String,
}

/// Choices offered when creating a proxy.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProxyData {
    /// Nodes with their current load.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nodes: Vec<NodeWithLoad>,
    /// User groups.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub groups: Vec<UserGroup>,
    /// Group of the current user.
    pub current_group: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_list_accepts_bare_array() {
        let json = serde_json::json!([{"proxyId": 1, "proxyName": "web", "nodeId": 3}]);
        let list: ProxyList = serde_json::from_value(json).unwrap();
        assert_eq!(list.proxies.len(), 1);
        assert_eq!(list.proxies[0].node_id, 3);
        assert!(list.nodes.is_empty());
    }

    #[test]
    fn test_proxy_list_accepts_object() {
        let json = serde_json::json!({
            "proxies": [{"proxyId": 9, "locations": "/api"}],
            "nodes": [{"nodeId": 3, "name": "HK-1", "hostname": "hk1.example.com"}]
        });
        let list: ProxyList = serde_json::from_value(json).unwrap();
        assert_eq!(list.proxies[0].location, "/api");
        assert_eq!(list.nodes[0].hostname, "hk1.example.com");

        let json = serde_json::json!({"proxies": null, "nodes": null});
        let list: ProxyList = serde_json::from_value(json).unwrap();
        assert_eq!(list, ProxyList::default());
    }

    #[test]
    fn test_create_request_omits_unset_options() {
        let req = CreateProxyRequest::new("ssh", "tcp", "127.0.0.1", 22, 20022, 5);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["localIp"], "127.0.0.1");
        assert_eq!(json["nodeId"], 5);
        assert!(json.get("domain").is_none());
        assert!(json.get("hostHeaderRewrite").is_none());

        let back: CreateProxyRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_update_request_sends_null_options() {
        let proxy = Proxy {
            proxy_id: 12,
            proxy_name: "web".into(),
            proxy_type: "http".into(),
            domain: "example.com".into(),
            local_port: 8080,
            ..Proxy::default()
        };
        let req = UpdateProxyRequest::from(&proxy);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["proxyId"], 12);
        assert_eq!(json["domain"], "example.com");
        assert!(json["hostHeaderRewrite"].is_null());
        assert_eq!(json["localPort"], 8080);
    }

    #[test]
    fn test_multiple_config_request_shape() {
        let ids = [1_i64, 2, 3];
        let req = MultipleConfigRequest {
            proxy_ids: &ids,
            format: ConfigFormat::Json,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"proxyIds":[1,2,3],"format":"json"}"#
        );
    }
}
