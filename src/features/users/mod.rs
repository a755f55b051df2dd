//! Donor and account management for the staff dashboard.

pub(crate) mod client;
pub(crate) mod types;
