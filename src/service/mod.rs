//! Business logic between the Discord event handlers and the relay client.

pub mod roles;
