//! Page frames: the public site shell and the staff dashboard.

mod dashboard_layout;
mod public_layout;
mod sidebar;
mod topbar;

pub(crate) use dashboard_layout::DashboardLayout;
pub(crate) use public_layout::{PublicLayout, use_viewer};
