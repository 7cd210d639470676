//! Common types used across the ME Frp client library.

pub mod common;
pub mod envelope;
pub mod serde_helpers;

pub use common::*;
pub use envelope::Envelope;
