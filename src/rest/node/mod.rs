//! Node endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::node;

impl MeFrpClient {
    /// List nodes available to the user.
    pub async fn get_node_list(&self) -> Result<Vec<Node>, MeFrpError> {
        self.get(node::LIST).await?.into_data()
    }

    /// Get runtime status of all nodes.
    pub async fn get_node_status(&self) -> Result<Vec<NodeStatus>, MeFrpError> {
        self.get(node::STATUS).await?.into_data()
    }

    /// Get the frps port and token of a node.
    pub async fn get_node_token(&self, node_id: i64) -> Result<NodeToken, MeFrpError> {
        self.post(node::SECRET, &NodeIdRequest { node_id })
            .await?
            .into_data()
    }

    /// List connection addresses of the nodes the user's proxies run on.
    pub async fn get_node_connection_list(&self) -> Result<Vec<NodeConnection>, MeFrpError> {
        self.get(node::NAME_LIST).await?.into_data()
    }

    /// Ask a node for an unused remote port.
    ///
    /// `proxy_type` is omitted from the query when empty.
    pub async fn get_free_port(&self, node_id: i64, proxy_type: &str) -> Result<i32, MeFrpError> {
        self.get_with_query(node::FREE_PORT, &FreePortQuery { node_id, proxy_type })
            .await?
            .into_data()
    }
}
