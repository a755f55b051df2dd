//! Blood requests: the public board, the add/edit forms and the dashboard
//! table all share these types and calls.

pub(crate) mod client;
pub(crate) mod types;
