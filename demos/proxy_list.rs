//! Example: Listing proxies and exporting their frpc configuration.
//!
//! Requires MEFRP_TOKEN.
//!
//! Run with: cargo run --example proxy_list

use mefrp_api_client::types::ConfigFormat;
use mefrp_api_client::{ClientConfig, MeFrpClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::try_from_env().ok_or("MEFRP_TOKEN is not set")?;
    let client = MeFrpClient::builder().config(config).build();

    let list = client.get_proxy_list().await?;
    println!("=== Proxies ({}) ===", list.proxies.len());
    for proxy in &list.proxies {
        let node = list
            .nodes
            .iter()
            .find(|node| node.node_id == proxy.node_id)
            .map(|node| node.hostname.as_str())
            .unwrap_or("?");
        println!(
            "{} [{}] {}:{} -> {}:{} online={}",
            proxy.proxy_name,
            proxy.proxy_type,
            proxy.local_ip,
            proxy.local_port,
            node,
            proxy.remote_port,
            proxy.is_online
        );
    }

    if let Some(first) = list.proxies.first() {
        println!("\n=== Config for {} ===", first.proxy_name);
        let config = client
            .get_proxy_config(first.proxy_id, ConfigFormat::Toml)
            .await?;
        println!("{}", config.config);
    }

    Ok(())
}
