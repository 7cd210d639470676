//! Node donation endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::donate;

impl MeFrpClient {
    /// Apply to donate a node.
    pub async fn apply_node_donate(&self, donation: &NodeDonate) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(donate::APPLY, donation)
            .await?
            .into_unit()
    }

    /// List the user's donation applications.
    pub async fn get_user_node_donates(&self) -> Result<Vec<NodeDonate>, MeFrpError> {
        self.get(donate::LIST).await?.into_data()
    }

    /// Apply to remove a donated node.
    pub async fn apply_node_delete(&self, node_id: i64, reason: &str) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(donate::DELETE_APPLY, &NodeDeleteApply { node_id, reason })
            .await?
            .into_unit()
    }

    /// List the user's node removal applications.
    pub async fn get_user_node_delete_requests(
        &self,
    ) -> Result<Vec<NodeDeleteRequest>, MeFrpError> {
        self.get(donate::DELETE_LIST).await?.into_data()
    }

    /// Apply to change a donated node.
    pub async fn apply_node_edit(&self, request: &NodeEditRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(donate::EDIT_APPLY, request)
            .await?
            .into_unit()
    }

    /// List the user's node edit applications.
    pub async fn get_user_node_edit_requests(&self) -> Result<Vec<NodeEditRequest>, MeFrpError> {
        self.get(donate::EDIT_LIST).await?.into_data()
    }

    /// Generate the install script for a donated node.
    pub async fn get_install_script(
        &self,
        request: &InstallScriptRequest,
    ) -> Result<InstallScript, MeFrpError> {
        self.post(donate::SCRIPT, request).await?.into_data()
    }
}
