//! Proxy endpoints.

mod types;

pub use types::*;

use crate::error::MeFrpError;
use crate::rest::MeFrpClient;
use crate::rest::endpoints::proxy;
use crate::types::ConfigFormat;

impl MeFrpClient {
    /// List the user's proxies and the nodes they run on.
    pub async fn get_proxy_list(&self) -> Result<ProxyList, MeFrpError> {
        self.get(proxy::LIST).await?.into_data()
    }

    /// Create a proxy.
    pub async fn create_proxy(&self, request: &CreateProxyRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(proxy::CREATE, request)
            .await?
            .into_unit()
    }

    /// Update a proxy.
    pub async fn update_proxy(&self, request: &UpdateProxyRequest) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(proxy::UPDATE, request)
            .await?
            .into_unit()
    }

    /// Delete a proxy.
    pub async fn delete_proxy(&self, proxy_id: i64) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(proxy::DELETE, &ProxyIdRequest { proxy_id })
            .await?
            .into_unit()
    }

    /// Kick a proxy offline.
    pub async fn kick_proxy(&self, proxy_id: i64) -> Result<(), MeFrpError> {
        self.post::<serde_json::Value, _>(proxy::KICK, &ProxyIdRequest { proxy_id })
            .await?
            .into_unit()
    }

    /// Enable or disable a proxy.
    pub async fn toggle_proxy(&self, proxy_id: i64, is_disabled: bool) -> Result<(), MeFrpError> {
        let request = ToggleProxyRequest {
            proxy_id,
            is_disabled,
        };
        self.post::<serde_json::Value, _>(proxy::TOGGLE, &request)
            .await?
            .into_unit()
    }

    /// Export the frpc configuration of one proxy.
    pub async fn get_proxy_config(
        &self,
        proxy_id: i64,
        format: ConfigFormat,
    ) -> Result<ProxyConfig, MeFrpError> {
        self.post(proxy::CONFIG, &ProxyConfigRequest { proxy_id, format })
            .await?
            .into_data()
    }

    /// Export one frpc configuration covering several proxies.
    pub async fn get_multiple_proxy_configs(
        &self,
        proxy_ids: &[i64],
        format: ConfigFormat,
    ) -> Result<ProxyConfig, MeFrpError> {
        self.post(proxy::CONFIG_MULTIPLE, &MultipleConfigRequest { proxy_ids, format })
            .await?
            .into_data()
    }

    /// Get one-click startup parameters for a proxy.
    pub async fn get_easy_startup_config(
        &self,
        proxy_id: i64,
    ) -> Result<EasyStartProxy, MeFrpError> {
        self.post(proxy::EASY_STARTUP, &ProxyIdRequest { proxy_id })
            .await?
            .into_data()
    }

    /// Get the nodes and groups offered when creating a proxy.
    pub async fn get_create_proxy_data(&self) -> Result<CreateProxyData, MeFrpError> {
        self.get(proxy::CREATE_PROXY_DATA).await?.into_data()
    }
}
