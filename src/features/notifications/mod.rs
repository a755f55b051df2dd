//! Broadcast notifications managed by administrators.

pub(crate) mod client;
pub(crate) mod types;
