use crate::app_lib::{AppError, json::string_or_number};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub body: String,
    #[serde(default, alias = "createdAt", deserialize_with = "string_or_number")]
    pub created_at: String,
}

#[derive(Deserialize)]
pub(crate) struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Deserialize)]
pub(crate) struct NotificationEnvelope {
    pub data: Notification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NotificationForm {
    pub title: String,
    pub body: String,
}

impl NotificationForm {
    pub fn from_notification(notification: &Notification) -> Self {
        Self {
            title: notification.title.clone(),
            body: notification.body.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err(AppError::Config("Title and message are required.".to_string()));
        }
        Ok(())
    }
}
