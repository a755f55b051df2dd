//! Donation eligibility questionnaire. Questions come from the API one at a
//! time; the API scores the answers.

pub(crate) mod client;
pub(crate) mod types;
