use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, Button, PublicLayout, Spinner, TextField},
    features::auth::{
        client::{self, UserResolver, login_error_message},
        gate::landing_path,
        state::use_auth,
        types::LoginRequest,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let api = auth.api.clone();
    let login_action = Action::new_local(move |request: &LoginRequest| {
        let api = api.clone();
        let request = request.clone();
        async move {
            let response = client::login(&api, &request).await?;
            let role = match response.user {
                Some(user) => Some(user.role),
                None => api.resolve_current_user().await.ok().map(|user| user.role),
            };
            Ok::<_, AppError>(role)
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(role) => {
                    auth.refresh();
                    navigate(
                        landing_path(role),
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => set_error.set(Some(login_error_message(&err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if request.email.is_empty() || request.password.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }
        login_action.dispatch(request);
    };

    view! {
        <PublicLayout>
            <div class=format!("max-w-md mx-auto {}", Theme::CARD)>
                <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Sign in"</h1>
                <form class="space-y-5" on:submit=on_submit>
                    <TextField
                        label="Email"
                        id="email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="name@example.com"
                        required=true
                        value=email
                        on_input=move |value| set_email.set(value)
                    />
                    <TextField
                        label="Password"
                        id="password"
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                        value=password
                        on_input=move |value| set_password.set(value)
                    />
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Login"
                    </Button>
                    {move || login_action.pending().get().then_some(view! { <Spinner /> })}
                    {move || {
                        error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                </form>
                <p class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                    "New to RedLink? "
                    <A href=paths::REGISTER {..} class=Theme::LINK>"Create an account"</A>
                </p>
            </div>
        </PublicLayout>
    }
}
