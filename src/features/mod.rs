//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while API paths, payload shapes and access
//! rules stay in one place per feature area.

pub(crate) mod auth;
pub(crate) mod donation;
pub(crate) mod messages;
pub(crate) mod notifications;
pub(crate) mod requests;
pub(crate) mod stats;
pub(crate) mod users;
