mod alert;
mod button;
mod confirm;
mod field;
mod pagination;
mod spinner;

pub(crate) use alert::{Alert, AlertKind, Feedback, FeedbackBanner};
pub(crate) use button::{Button, ButtonTone};
pub(crate) use confirm::confirm;
pub(crate) use field::{SelectField, TextArea, TextField, same_label};
pub(crate) use pagination::Pagination;
pub(crate) use spinner::Spinner;
