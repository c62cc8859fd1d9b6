//! Relay bridge that mirrors Discord guild role membership to the Haven API.
//!
//! The bot connects to the Discord gateway, performs a full role sync of
//! every visible guild at startup, and thereafter pushes a fresh role
//! snapshot to Haven whenever a member's roles change or a member leaves.

pub mod bot;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod relay;
pub mod service;

pub use config::Config;
pub use relay::RelayClient;
