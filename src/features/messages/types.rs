use crate::app_lib::{AppError, json::string_or_number};
use serde::{Deserialize, Serialize};

/// Status value the inbox writes once a message is opened.
pub const READ: &str = "read";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub message: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub status: String,
    #[serde(default, alias = "createdAt", deserialize_with = "string_or_number")]
    pub created: String,
}

impl ContactMessage {
    pub fn is_read(&self) -> bool {
        self.status.eq_ignore_ascii_case(READ)
    }

    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |letter| letter.to_uppercase().collect())
    }
}

#[derive(Deserialize)]
pub(crate) struct MessageList {
    #[serde(default)]
    pub messages: Vec<ContactMessage>,
}

/// Public contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(AppError::Config("Please fill in all fields.".to_string()));
        }
        if !self.email.contains('@') {
            return Err(AppError::Config("Please enter a valid email.".to_string()));
        }
        Ok(())
    }
}

/// Marks `id` as read in a local list, returning whether anything changed.
pub fn mark_read_locally(messages: &mut [ContactMessage], id: &str) -> bool {
    match messages.iter_mut().find(|message| message.id == id) {
        Some(message) if !message.is_read() => {
            message.status = READ.to_string();
            true
        }
        _ => false,
    }
}

pub fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|message| !message.is_read()).count()
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, ContactMessage, mark_read_locally, unread_count};

    fn message(id: &str, status: &str) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: "nour".to_string(),
            status: status.to_string(),
            ..ContactMessage::default()
        }
    }

    #[test]
    fn marking_read_only_changes_unread_messages() {
        let mut inbox = vec![message("m1", "unread"), message("m2", "read")];

        assert!(mark_read_locally(&mut inbox, "m1"));
        assert!(!mark_read_locally(&mut inbox, "m1"));
        assert!(!mark_read_locally(&mut inbox, "m2"));
        assert!(!mark_read_locally(&mut inbox, "missing"));
        assert_eq!(unread_count(&inbox), 0);
    }

    #[test]
    fn initial_is_uppercase() {
        assert_eq!(message("m1", "").initial(), "N");
        assert_eq!(ContactMessage::default().initial(), "?");
    }

    #[test]
    fn contact_form_requires_every_field() {
        let mut form = ContactForm {
            name: "Nour".to_string(),
            email: "nour@mail.test".to_string(),
            subject: "Volunteering".to_string(),
            message: "How can I help?".to_string(),
        };
        assert!(form.validate().is_ok());

        form.subject = "  ".to_string();
        assert!(form.validate().is_err());
    }
}
