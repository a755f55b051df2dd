//! Client helpers for user endpoints. Paths are centralized here; the API
//! enforces who may call them.

use crate::{
    app_lib::{ApiClient, AppError, Method, Transport, path_id, with_query},
    features::users::types::{DonorPage, User, UserEnvelope, UserForm, UserStatus},
};
use serde_json::json;

pub async fn list_users<T: Transport>(api: &ApiClient<T>) -> Result<Vec<User>, AppError> {
    api.get_json("/users").await
}

pub async fn get_user<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<User, AppError> {
    let id = path_id(id)?;
    let envelope: UserEnvelope = api.get_json(&format!("/user/{id}")).await?;
    Ok(envelope.data)
}

pub async fn add_user<T: Transport>(api: &ApiClient<T>, form: &UserForm) -> Result<(), AppError> {
    form.validate()?;
    if form.password.is_none() || form.role.is_none() {
        return Err(AppError::Config(
            "Password and role are required for new users.".to_string(),
        ));
    }
    api.send_empty(Method::Post, "/user/add", form).await
}

pub async fn update_user<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    form: &UserForm,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    form.validate()?;
    api.send_empty(Method::Put, &format!("/user/update/{id}"), form)
        .await
}

pub async fn delete_user<T: Transport>(api: &ApiClient<T>, id: &str) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.delete(&format!("/user/{id}")).await
}

pub async fn set_user_status<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    status: UserStatus,
) -> Result<(), AppError> {
    let id = path_id(id)?;
    api.send_empty(
        Method::Put,
        &format!("/user/status/{id}"),
        &json!({ "status": status }),
    )
    .await
}

/// One page of donors currently able to give blood. Pages start at 1.
pub async fn available_donors<T: Transport>(
    api: &ApiClient<T>,
    page: u32,
    limit: u32,
) -> Result<DonorPage, AppError> {
    let page = page.max(1).to_string();
    let limit = limit.max(1).to_string();
    api.get_json(&with_query("/available-donor", &[("page", page.as_str()), ("limit", limit.as_str())]))
        .await
}

#[cfg(test)]
mod tests {
    use super::{add_user, available_donors, delete_user, get_user, list_users, set_user_status};
    use crate::{
        app_lib::{
            AppError, Method,
            testing::{FakeTransport, client},
        },
        features::{
            auth::role::Role,
            users::types::{UserForm, UserStatus},
        },
    };

    #[tokio::test]
    async fn list_users_reads_bare_array() {
        let transport =
            FakeTransport::new().respond(200, r#"[{"_id":"1","name":"Rami","role":"2001"}]"#);
        let api = client(transport.clone(), Some("t"));

        let users = list_users(&api).await.expect("users");

        assert_eq!(users[0].role, Some(Role::Donor));
        assert_eq!(transport.requests()[0].url, "https://api.test/api/users");
    }

    #[tokio::test]
    async fn get_user_unwraps_data_envelope() {
        let transport = FakeTransport::new().respond(200, r#"{"data":{"_id":"7","name":"Mona"}}"#);
        let api = client(transport.clone(), Some("t"));

        let user = get_user(&api, "7").await.expect("user");

        assert_eq!(user.name, "Mona");
        assert_eq!(transport.requests()[0].url, "https://api.test/api/user/7");
    }

    #[tokio::test]
    async fn blank_ids_never_reach_the_api() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        assert!(matches!(get_user(&api, " ").await, Err(AppError::Config(_))));
        assert!(delete_user(&api, "").await.is_err());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn status_change_sends_lowercase_value() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));

        set_user_status(&api, "7", UserStatus::Inactive)
            .await
            .expect("status");

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "https://api.test/api/user/status/7");
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"status":"inactive"}"#));
    }

    #[tokio::test]
    async fn add_user_sends_role_code() {
        let transport = FakeTransport::new().respond(201, "{}");
        let api = client(transport.clone(), Some("t"));
        let form = UserForm {
            name: "Hospital A".to_string(),
            email: "a@hospital.test".to_string(),
            password: Some("password1".to_string()),
            role: Some(Role::Hospital),
            ..UserForm::default()
        };

        add_user(&api, &form).await.expect("add");

        let body = transport.requests()[0].body.clone().unwrap_or_default();
        assert!(body.contains(r#""role":"1996""#));
    }

    #[tokio::test]
    async fn add_user_requires_password_and_role() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), Some("t"));
        let form = UserForm {
            name: "Rami".to_string(),
            email: "rami@redlink.test".to_string(),
            ..UserForm::default()
        };

        assert!(add_user(&api, &form).await.is_err());
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn donors_are_requested_by_page() {
        let transport = FakeTransport::new().respond(200, r#"{"users":[],"totalPages":0,"count":0}"#);
        let api = client(transport.clone(), Some("t"));

        available_donors(&api, 0, 10).await.expect("donors");

        assert_eq!(
            transport.requests()[0].url,
            "https://api.test/api/available-donor?page=1&limit=10"
        );
    }
}
