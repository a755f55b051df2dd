//! Contact form submissions and the admin inbox that reads them.

pub(crate) mod client;
pub(crate) mod types;
