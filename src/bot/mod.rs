//! Discord bot wiring for the role relay.
//!
//! The bot connects to the gateway, replays a full role snapshot of every
//! visible guild once the `ready` event arrives, and then relays individual
//! member role changes and removals as they happen.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive the guild list on ready
//! - `GUILD_MEMBERS` - Receive member update and removal events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
