//! Data models for the storefront.

pub mod session;

pub use session::{CartSession, keys as session_keys};
