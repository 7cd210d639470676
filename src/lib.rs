//! # ME Frp API Client
//!
//! An async Rust client library for the ME Frp management REST API.
//!
//! ## Features
//!
//! - Typed wrappers for authentication, proxies, nodes, donations, orders, ads
//!   and public endpoints
//! - One request per call, no hidden retries
//! - Token held as a [`secrecy::SecretString`] and redacted from debug output
//! - Money fields as `rust_decimal::Decimal`
//! - Request tracing through `reqwest-tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mefrp_api_client::MeFrpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MeFrpClient::new("my-token");
//!     let status = client.get_system_status().await?;
//!     println!("System status: {:?}", status.state());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! An HTTP 401 is reported as [`MeFrpError::Unauthorized`] without reading the
//! body. Any other response is decoded as an envelope, and an envelope code
//! other than 200 becomes [`MeFrpError::Api`] carrying the server's code and
//! message.

pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::ClientConfig;
pub use error::{ApiError, MeFrpError};
pub use rest::{MeFrpClient, MeFrpClientBuilder};
pub use types::Envelope;

/// Result type alias using MeFrpError
pub type Result<T> = std::result::Result<T, MeFrpError>;
