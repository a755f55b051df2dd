//! Dashboard overview figures: donors per blood type and availability.

pub(crate) mod client;
pub(crate) mod types;
