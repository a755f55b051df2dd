//! Shared UI components exported for routes and features.

pub(crate) mod forms;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::{DashboardLayout, PublicLayout};
pub(crate) use ui::{
    Alert, AlertKind, Button, Feedback, FeedbackBanner, Pagination, SelectField, Spinner,
    TextArea, TextField, confirm,
};
