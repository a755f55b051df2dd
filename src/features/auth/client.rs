//! Client helpers for the auth endpoints and the "who am I" lookup. Successful
//! login and registration store the returned token in the session before
//! returning, so the next authenticated call already carries it.

use crate::{
    app_lib::{ApiClient, AppError, Method, Transport},
    features::auth::types::{
        AuthResponse, CurrentUser, LoginRequest, MIN_PASSWORD_LEN, RegisterRequest,
    },
};
use std::future::Future;

/// Message shown when the API rejects the credentials with 400.
pub const WRONG_CREDENTIALS: &str = "Email or Password is Wrong!";

/// Resolves the account behind the current bearer token.
pub trait UserResolver {
    fn resolve_current_user(&self) -> impl Future<Output = Result<CurrentUser, AppError>>;
}

impl<T: Transport> UserResolver for ApiClient<T> {
    /// One authenticated `GET /user`. Not memoized.
    async fn resolve_current_user(&self) -> Result<CurrentUser, AppError> {
        self.get_json("/user").await
    }
}

pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    request: &LoginRequest,
) -> Result<AuthResponse, AppError> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(AppError::Config(
            "Email and password are required.".to_string(),
        ));
    }

    let response: AuthResponse = api
        .send_json(Method::Post, "/login", request)
        .await?;
    store_token(api, &response)?;
    log::info!("signed in");
    Ok(response)
}

pub async fn register<T: Transport>(
    api: &ApiClient<T>,
    request: &RegisterRequest,
) -> Result<AuthResponse, AppError> {
    validate_registration(request)?;

    let response: AuthResponse = api
        .send_json(Method::Post, "/register", request)
        .await?;
    store_token(api, &response)?;
    log::info!("account registered");
    Ok(response)
}

/// Calls `POST /logout` and clears the local token whatever the API answers.
/// The API error, if any, is still returned so the caller can log it.
pub async fn logout<T: Transport>(api: &ApiClient<T>) -> Result<(), AppError> {
    let result = api.post_empty("/logout").await;
    api.session().clear_token();
    result
}

/// Text for the login form alert.
pub fn login_error_message(err: &AppError) -> String {
    if err.status() == Some(400) {
        WRONG_CREDENTIALS.to_string()
    } else {
        err.message().to_string()
    }
}

fn store_token<T: Transport>(api: &ApiClient<T>, response: &AuthResponse) -> Result<(), AppError> {
    if response.token.trim().is_empty() {
        return Err(AppError::Parse("Response did not include a token.".to_string()));
    }
    api.session().set_token(&response.token);
    Ok(())
}

fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    let required = [
        ("Name", &request.name),
        ("Email", &request.email),
        ("Phone number", &request.phone_number),
        ("Blood type", &request.blood_type),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::Config(format!("{field} is required.")));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Config(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}
