//! Example: Working with MeFrpError and ApiError.
//!
//! Run with: cargo run --example error_handling

use mefrp_api_client::error::{ApiError, error_codes};
use mefrp_api_client::{MeFrpClient, MeFrpError};

#[tokio::main]
async fn main() {
    let api_error = ApiError::new(error_codes::FORBIDDEN, "proxy belongs to another user");
    println!("API error: {}", api_error);
    println!("Is forbidden: {}", api_error.is_forbidden());
    println!("Is server error: {}", api_error.is_server_error());

    // An anonymous client cannot read account data.
    let client = MeFrpClient::builder().build();
    match client.get_user_info().await {
        Ok(info) => println!("Logged in as {}", info.username),
        Err(MeFrpError::Unauthorized) => println!("Token missing or expired"),
        Err(MeFrpError::Api(inner)) if inner.is_unauthenticated() => {
            println!("Rejected by the API: {}", inner.message)
        }
        Err(MeFrpError::Decoding { source, body }) => {
            println!("Unexpected response ({}): {}", source, body)
        }
        Err(err) if err.is_timeout() => println!("Request timed out"),
        Err(err) => println!("Request failed: {}", err),
    }
}
