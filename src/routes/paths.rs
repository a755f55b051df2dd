//! URL paths used by links, redirects and the access table.

pub const HOME: &str = "/";
pub const CONTACT: &str = "/contact";
pub const GIVE_BLOOD: &str = "/give-blood";
pub const REQUESTS: &str = "/request-blood";
pub const ADD_REQUEST: &str = "/request-blood/add-request";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

pub const DASHBOARD: &str = "/dashboard";
pub const DASHBOARD_USERS: &str = "/dashboard/users";
pub const DASHBOARD_USER_ADD: &str = "/dashboard/users/add";
pub const DASHBOARD_DONORS: &str = "/dashboard/available-donor";
pub const DASHBOARD_REQUESTS: &str = "/dashboard/request";
pub const DASHBOARD_REQUEST_ADD: &str = "/dashboard/request/add";
pub const DASHBOARD_NOTIFICATIONS: &str = "/dashboard/notifications";
pub const DASHBOARD_MESSAGES: &str = "/dashboard/messages";

pub fn request_detail(id: &str) -> String {
    format!("{REQUESTS}/{id}")
}

pub fn user_edit(id: &str) -> String {
    format!("{DASHBOARD_USERS}/{id}")
}

pub fn user_detail(id: &str) -> String {
    format!("{DASHBOARD_USERS}/details/{id}")
}

pub fn request_edit(id: &str) -> String {
    format!("{DASHBOARD_REQUESTS}/{id}")
}

pub fn notification_edit(id: &str) -> String {
    format!("{DASHBOARD_NOTIFICATIONS}/{id}")
}
