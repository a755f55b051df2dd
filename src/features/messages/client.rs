use crate::{
    app_lib::{ApiClient, AppError, Method, Transport, path_id},
    features::messages::types::{ContactForm, ContactMessage, MessageList, READ},
};
use serde_json::json;

pub async fn send_contact<T: Transport>(
    api: &ApiClient<T>,
    form: &ContactForm,
) -> Result<(), AppError> {
    form.validate()?;
    api.send_empty(Method::Post, "/send-contact", form).await
}

pub async fn list_messages<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<ContactMessage>, AppError> {
    let list: MessageList = api.get_json("/messages").await?;
    Ok(list.messages)
}

pub async fn mark_message_read<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.send_empty(
        Method::Put,
        &format!("/messages/status/{id}"),
        &json!({ "status": READ }),
    )
    .await
}

pub async fn delete_message<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.delete(&format!("/messages/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::{delete_message, list_messages, mark_message_read, send_contact};
    use crate::{
        app_lib::{
            Method,
            testing::{FakeTransport, client},
        },
        features::messages::types::ContactForm,
    };

    #[tokio::test]
    async fn contact_form_posts_without_token() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), None);
        let form = ContactForm {
            name: "Nour".to_string(),
            email: "nour@mail.test".to_string(),
            subject: "Hello".to_string(),
            message: "Thanks for RedLink".to_string(),
        };

        send_contact(&api, &form).await.expect("sent");

        let sent = transport.requests();
        assert_eq!(sent[0].url, "https://api.test/api/send-contact");
        assert!(sent[0].body.as_deref().unwrap_or_default().contains(r#""subject":"Hello""#));
    }

    #[tokio::test]
    async fn inbox_round_trip() {
        let transport = FakeTransport::new()
            .respond(200, r#"{"messages":[{"_id":"m1","name":"Nour","status":"unread"}]}"#);
        let api = client(transport.clone(), Some("t"));

        let inbox = list_messages(&api).await.expect("inbox");
        mark_message_read(&api, &inbox[0].id).await.expect("read");
        delete_message(&api, "m1").await.expect("delete");

        let sent = transport.requests();
        assert_eq!(sent[1].method, Method::Put);
        assert_eq!(sent[1].url, "https://api.test/api/messages/status/m1");
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"status":"read"}"#));
        assert_eq!(sent[2].method, Method::Delete);
        assert_eq!(sent[2].url, "https://api.test/api/messages/m1");
    }
}
