//! Wire payloads sent to the Haven API.

pub mod roles;
