//! ME Frp REST API client.
//!
//! All operations are inherent methods on [`MeFrpClient`], grouped by the
//! area of the API they touch:
//! - [`auth`] - registration, login, magic links and password recovery
//! - [`user`] - account info, sign-in, logs, traffic and ICP domains
//! - [`proxy`] - proxy CRUD and frpc configuration export
//! - [`node`] - node listing, status and credentials
//! - [`donate`] - node donation applications
//! - [`cash`] - orders, payment and CDKs
//! - [`ads`] - advertisements, slots, credits and coupons
//! - [`public`] - statistics, store, downloads and system notices
//!
//! Operations that are not wrapped can still be reached through
//! [`MeFrpClient::invoke`]:
//!
//! ```rust,no_run
//! use mefrp_api_client::rest::{MeFrpClient, Method};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MeFrpClient::new("my-token");
//!     let notice: String = client
//!         .invoke::<String, ()>(Method::GET, "/auth/notice", None)
//!         .await?
//!         .into_data()?;
//!     println!("{notice}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;

pub mod ads;
pub mod auth;
pub mod cash;
pub mod donate;
pub mod node;
pub mod proxy;
pub mod public;
pub mod user;

pub use client::{MeFrpClient, MeFrpClientBuilder};
pub use reqwest::Method;
