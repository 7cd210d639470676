//! Example: Fetching public platform data.
//!
//! No token is needed.
//!
//! Run with: cargo run --example public_data

use mefrp_api_client::MeFrpClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = MeFrpClient::builder().build();

    println!("=== Statistics ===");
    let stats = client.get_statistics().await?;
    println!("Users: {}", stats.users);
    println!("Nodes: {}", stats.nodes);
    println!("Proxies: {}", stats.proxies);

    println!("\n=== Store ===");
    for item in client.get_store_items().await? {
        println!("{}: {} / {}", item.name, item.current_price, item.unit);
    }

    Ok(())
}
