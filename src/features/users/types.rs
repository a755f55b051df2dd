use crate::{
    app_lib::{AppError, json::string_or_number},
    features::auth::{role::Role, types::MIN_PASSWORD_LEN},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub const GENDERS: [&str; 2] = ["Male", "Female"];
/// Page size of the available donor list.
pub const DONORS_PER_PAGE: u32 = 10;

/// Account status as managed from the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    #[default]
    Pending,
    Banned,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Pending,
        UserStatus::Banned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
            UserStatus::Banned => "banned",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Banned => "Banned",
        }
    }

    /// Unrecognized values read as `Pending`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }

    /// Quick toggle offered next to each row.
    pub fn toggled(self) -> Self {
        if self == UserStatus::Active {
            UserStatus::Inactive
        } else {
            UserStatus::Active
        }
    }
}

impl Serialize for UserStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(UserStatus::parse(&string_or_number(deserializer)?))
    }
}

/// Role that tolerates unknown codes so one odd record does not fail a whole list.
fn optional_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| Role::deserialize(value).ok()))
}

/// Account record as listed and edited from the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub gender: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub blood_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub address: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub last_donation_date: String,
    #[serde(default, deserialize_with = "optional_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn role_label(&self) -> &'static str {
        self.role.map_or("Unknown", Role::label)
    }
}

/// `GET /user/{id}` wraps the record in `data`.
#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub data: User,
}

/// One page of `GET /available-donor`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DonorPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(default)]
    pub count: u64,
}

/// Payload of the add and update forms. `password` and `role` are only sent
/// when the add form fills them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_type: String,
    pub address: String,
    pub last_donation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserForm {
    /// Prefills the update form from an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            password: None,
            date_of_birth: user.date_of_birth.clone(),
            gender: user.gender.clone(),
            blood_type: user.blood_type.clone(),
            address: user.address.clone(),
            last_donation_date: user.last_donation_date.clone(),
            role: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::Config("Name and email are required.".to_string()));
        }
        if !self.blood_type.is_empty() && !BLOOD_TYPES.contains(&self.blood_type.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown blood type {}.",
                self.blood_type
            )));
        }
        let short_password = self
            .password
            .as_ref()
            .is_some_and(|password| password.chars().count() < MIN_PASSWORD_LEN);
        if short_password {
            return Err(AppError::Config(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }
        Ok(())
    }
}

/// Client-side list filter. Blank criteria match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Case-insensitive substring of the name.
    pub name: String,
    /// Exact blood type.
    pub blood_type: String,
    /// Case-insensitive substring of the address.
    pub address: String,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        contains_ignore_case(&user.name, &self.name)
            && (self.blood_type.is_empty() || user.blood_type == self.blood_type)
            && contains_ignore_case(&user.address, &self.address)
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|user| self.matches(user)).cloned().collect()
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{DonorPage, User, UserFilter, UserForm, UserStatus};
    use crate::features::auth::role::Role;

    fn user(name: &str, blood_type: &str, address: &str) -> User {
        User {
            id: name.to_lowercase(),
            name: name.to_string(),
            blood_type: blood_type.to_string(),
            address: address.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn user_decodes_mixed_role_and_status_shapes() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"_id":"1","name":"Hadi","role":1995,"status":"active","phone_number":599123456},
                {"_id":"2","name":"Mona","role":"2001","status":"INACTIVE"},
                {"_id":"3","name":"Odd","role":"7","status":"frozen","address":null}
            ]"#,
        )
        .expect("users");

        assert_eq!(users[0].role, Some(Role::Admin));
        assert_eq!(users[0].phone_number, "599123456");
        assert_eq!(users[1].status, UserStatus::Inactive);
        assert_eq!(users[2].role, None);
        assert_eq!(users[2].role_label(), "Unknown");
        assert_eq!(users[2].status, UserStatus::Pending);
        assert_eq!(users[2].address, "");
    }

    #[test]
    fn status_toggles_between_active_and_inactive() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Banned.toggled(), UserStatus::Active);
    }

    #[test]
    fn filter_matches_blood_type_exactly_and_address_loosely() {
        let users = vec![
            user("Rami", "A+", "Nablus, Rafidia"),
            user("Sara", "AB+", "Ramallah"),
            user("Omar", "A+", "Jenin"),
        ];
        let filter = UserFilter {
            blood_type: "A+".to_string(),
            address: "  nablus ".to_string(),
            ..UserFilter::default()
        };

        let names: Vec<_> = filter.apply(&users).into_iter().map(|user| user.name).collect();

        assert_eq!(names, ["Rami"]);
        assert_eq!(UserFilter::default().apply(&users).len(), 3);
    }

    #[test]
    fn filter_by_name_is_case_insensitive() {
        let users = vec![user("Rami", "A+", ""), user("Sara", "O-", "")];
        let filter = UserFilter {
            name: "SAR".to_string(),
            ..UserFilter::default()
        };
        assert_eq!(filter.apply(&users)[0].name, "Sara");
    }

    #[test]
    fn donor_page_reads_camel_case_totals() {
        let page: DonorPage =
            serde_json::from_str(r#"{"users":[{"_id":"1"}],"totalPages":4,"count":37}"#)
                .expect("page");
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.count, 37);
        assert_eq!(page.users.len(), 1);
    }

    #[test]
    fn form_omits_password_and_role_on_update() {
        let existing = User {
            name: "Rami".to_string(),
            email: "rami@redlink.test".to_string(),
            role: Some(Role::Donor),
            ..User::default()
        };
        let json = serde_json::to_value(UserForm::from_user(&existing)).expect("json");
        assert!(json.get("password").is_none());
        assert!(json.get("role").is_none());
        assert_eq!(json["email"], "rami@redlink.test");
    }

    #[test]
    fn form_validation() {
        let mut form = UserForm {
            name: "Rami".to_string(),
            email: "rami@redlink.test".to_string(),
            blood_type: "O+".to_string(),
            password: Some("12345678".to_string()),
            role: Some(Role::Donor),
            ..UserForm::default()
        };
        assert!(form.validate().is_ok());

        form.password = Some("123".to_string());
        assert!(form.validate().is_err());

        form.password = None;
        form.blood_type = "C+".to_string();
        assert!(form.validate().is_err());
    }
}
