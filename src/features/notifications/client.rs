use crate::{
    app_lib::{ApiClient, AppError, Method, Transport, path_id},
    features::notifications::types::{
        Notification, NotificationEnvelope, NotificationForm, NotificationList,
    },
};

pub async fn list_notifications<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<Notification>, AppError> {
    let list: NotificationList = api.get_json("/notifications").await?;
    Ok(list.notifications)
}

pub async fn get_notification<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
) -> Result<Notification, AppError> {
    let id = path_id(id)?;
    let envelope: NotificationEnvelope = api.get_json(&format!("/notification/{id}")).await?;
    Ok(envelope.data)
}

/// Publishes a notification to every user; the API handles the fan-out.
pub async fn send_to_all<T: Transport>(
    api: &ApiClient<T>,
    form: &NotificationForm,
) -> Result<(), AppError> {
    form.validate()?;
    api.send_empty(Method::Post, "/notifications/send-to-all", form)
        .await
}

pub async fn update_notification<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    form: &NotificationForm,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    form.validate()?;
    api.send_empty(Method::Put, &format!("/notification/update/{id}"), form)
        .await
}

pub async fn delete_notification<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.delete(&format!("/notification/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::{get_notification, list_notifications, send_to_all, update_notification};
    use crate::{
        app_lib::{
            Method,
            testing::{FakeTransport, client},
        },
        features::notifications::types::NotificationForm,
    };

    fn form() -> NotificationForm {
        NotificationForm {
            title: "Urgent O-".to_string(),
            body: "Rafidia needs O- donors today.".to_string(),
        }
    }

    #[tokio::test]
    async fn list_reads_wrapped_array() {
        let transport = FakeTransport::new().respond(
            200,
            r#"{"notifications":[{"_id":"n1","title":"Hi","body":"There","createdAt":"2025-01-01"}]}"#,
        );
        let api = client(transport, Some("t"));

        let list = list_notifications(&api).await.expect("list");

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].created_at, "2025-01-01");
    }

    #[tokio::test]
    async fn detail_unwraps_data() {
        let transport =
            FakeTransport::new().respond(200, r#"{"data":{"_id":"n1","title":"Hi","body":"x"}}"#);
        let api = client(transport.clone(), Some("t"));

        assert_eq!(get_notification(&api, "n1").await.expect("n1").title, "Hi");
        assert_eq!(transport.requests()[0].url, "https://api.test/api/notification/n1");
    }

    #[tokio::test]
    async fn broadcast_and_update_use_distinct_endpoints() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        send_to_all(&api, &form()).await.expect("send");
        update_notification(&api, "n1", &form()).await.expect("update");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "https://api.test/api/notifications/send-to-all");
        assert_eq!(sent[1].method, Method::Put);
        assert_eq!(sent[1].url, "https://api.test/api/notification/update/n1");
    }

    #[tokio::test]
    async fn empty_notification_is_rejected_locally() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        assert!(send_to_all(&api, &NotificationForm::default()).await.is_err());
        assert_eq!(transport.calls(), 0);
    }
}
