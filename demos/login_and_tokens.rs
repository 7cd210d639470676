//! Example: Logging in and rotating the access token.
//!
//! Requires MEFRP_USERNAME, MEFRP_PASSWORD and MEFRP_CAPTCHA_TOKEN.
//!
//! Run with: cargo run --example login_and_tokens

use mefrp_api_client::MeFrpClient;
use mefrp_api_client::rest::auth::LoginRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("MEFRP_USERNAME")?;
    let password = std::env::var("MEFRP_PASSWORD")?;
    let captcha = std::env::var("MEFRP_CAPTCHA_TOKEN")?;

    let mut client = MeFrpClient::builder().build();
    println!("Has token before login: {}", client.has_token());

    // The returned token is also stored on the client.
    client
        .login(&LoginRequest::new(&username, &password, &captcha))
        .await?;
    println!("Has token after login: {}", client.has_token());

    let info = client.get_user_info().await?;
    println!("User: {} ({})", info.username, info.friendly_group);

    let frp_token = client.get_user_frp_token().await?;
    println!("frpc token length: {}", frp_token.len());

    // A token obtained elsewhere can be swapped in for later calls.
    if let Ok(token) = std::env::var("MEFRP_TOKEN") {
        client.set_token(token);
        let info = client.get_user_info().await?;
        println!("Switched to: {}", info.username);
    }

    Ok(())
}
