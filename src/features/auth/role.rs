//! The closed set of account roles.
//!
//! The API sends role codes inconsistently: sometimes as text (`"1995"`),
//! sometimes as a number (`1995`). Both forms are accepted here, at the point
//! the value crosses into the app, and collapse into one [`Role`]. Everything
//! past this boundary compares enum values only. Outgoing payloads carry the
//! textual code.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Account role. Exactly one per user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Hospital,
    Patient,
    Donor,
}

/// Code and label for every role, in `Role::ALL` order. The only place either
/// is spelled out.
const ROLE_TABLE: [(&str, &str); 4] = [
    ("1995", "Admin"),
    ("1996", "Hospital"),
    ("1999", "Patient"),
    ("2001", "Donor"),
];

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Hospital, Role::Patient, Role::Donor];

    /// Wire code, e.g. `"1995"`.
    pub fn code(self) -> &'static str {
        ROLE_TABLE[self as usize].0
    }

    /// Human label shown in tables, badges and selects.
    pub fn label(self) -> &'static str {
        ROLE_TABLE[self as usize].1
    }

    /// Parses a textual code. Surrounding whitespace is ignored.
    pub fn from_code(code: &str) -> Option<Role> {
        let code = code.trim();
        Role::ALL.into_iter().find(|role| role.code() == code)
    }

    pub fn from_number(code: u64) -> Option<Role> {
        Role::from_code(&code.to_string())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RoleVisitor)
    }
}

struct RoleVisitor;

impl de::Visitor<'_> for RoleVisitor {
    type Value = Role;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a role code such as \"1995\" or 1995")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Role, E> {
        Role::from_code(value)
            .ok_or_else(|| E::custom(format!("unknown role code {value:?}")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Role, E> {
        Role::from_number(value).ok_or_else(|| E::custom(format!("unknown role code {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Role, E> {
        u64::try_from(value)
            .ok()
            .and_then(Role::from_number)
            .ok_or_else(|| E::custom(format!("unknown role code {value}")))
    }
}
