//! Auth context for the browser build. One `Session` (cookie-backed) and one
//! API client are created at the root and shared through Leptos context, so
//! every page reads the same token. `signed_in` only drives navbar rendering;
//! role decisions always go through the gate.

use crate::app_lib::{ApiClient, HttpClient, Session, api::BrowserTransport, config::AppConfig};
use crate::features::auth::{client, gate::Resolution, types::CurrentUser};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone)]
pub struct AuthContext {
    pub api: HttpClient,
    pub signed_in: RwSignal<bool>,
}

impl AuthContext {
    fn new(api: HttpClient) -> Self {
        let signed_in = RwSignal::new(api.session().has_token());
        Self { api, signed_in }
    }

    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Re-reads the token after login, registration or logout.
    pub fn refresh(&self) {
        self.signed_in.set(self.session().has_token());
    }
}

fn browser_client() -> HttpClient {
    let config = AppConfig::load();
    log::debug!("api base url: {}", config.api_base_url);
    ApiClient::new(&config, Session::browser(), BrowserTransport)
}

/// Provides the auth context to the whole app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new(browser_client()));

    view! { {children()} }
}

/// Returns the auth context, or a detached one outside the provider.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(browser_client()))
}

/// Shorthand for the shared API client.
pub fn use_api() -> HttpClient {
    use_auth().api
}

/// Logs out through the API, then runs `on_done` (usually a redirect to the
/// login page). The local token is gone even if the API call failed.
pub fn sign_out(auth: AuthContext, on_done: impl FnOnce() + 'static) {
    spawn_local(async move {
        if let Err(err) = client::logout(&auth.api).await {
            log::warn!("logout request failed: {err}");
        }
        auth.refresh();
        on_done();
    });
}

/// User resolved by the nearest role gate, shared with everything below it.
#[derive(Clone)]
pub struct CurrentUserContext(pub CurrentUser);

pub fn use_current_user() -> Option<CurrentUser> {
    use_context::<CurrentUserContext>().map(|context| context.0)
}

/// Current-user lookup made by a layout, shared so gates below it do not
/// repeat `GET /user`. `None` while the lookup runs.
#[derive(Clone, Copy)]
pub struct SessionLookup(pub Signal<Option<Resolution>>);
