use crate::{
    app_lib::json::{optional_string_or_number, string_or_number},
    features::auth::role::Role,
};
use serde::{Deserialize, Serialize};

/// Minimum password length accepted by the register form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// The signed-in account as returned by `GET /user`. Only `role` matters to
/// access control; the rest is display data and is decoded leniently so an odd
/// profile field never fails the lookup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    pub role: Role,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub blood_type: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub status: Option<String>,
}

impl CurrentUser {
    /// First letter of the name for avatar bubbles.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|letter| letter.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_type: String,
    pub address: String,
    pub last_donation_date: String,
    pub password: String,
}

/// Response of `POST /login` and `POST /register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<CurrentUser>,
}
