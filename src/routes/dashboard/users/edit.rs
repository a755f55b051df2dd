use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Button, Spinner, forms::UserFields},
    features::{
        auth::state::use_api,
        users::{client, types::UserForm},
    },
    routes::{dashboard::PageHeader, paths},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    hooks::{use_navigate, use_params},
    params::Params,
};

#[derive(Params, PartialEq, Clone)]
struct UserParams {
    id: Option<String>,
}

#[component]
pub fn EditUserPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params::<UserParams>();
    let user_id = Signal::derive(move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    });
    let form = RwSignal::new(UserForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let load_api = api.clone();
    let user = LocalResource::new(move || {
        let api = load_api.clone();
        let id = user_id.get();
        async move { client::get_user(&api, &id).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(user)) = user.get() {
            form.set(UserForm::from_user(&user));
        }
    });

    let save_action = Action::new_local(move |(id, form): &(String, UserForm)| {
        let api = api.clone();
        let id = id.clone();
        let form = form.clone();
        async move { client::update_user(&api, &id, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD_USERS, Default::default()),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        save_action.dispatch((user_id.get_untracked(), form.get_untracked()));
    };

    view! {
        <div class="max-w-4xl space-y-6">
            <PageHeader title="Edit donor" subtitle="Update the account details." />
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match user.get() {
                    Some(Ok(_)) => {
                        view! {
                            <form class=format!("space-y-6 {}", Theme::CARD) on:submit=on_submit>
                                <UserFields form=form />
                                <Button button_type="submit" disabled=save_action.pending()>
                                    "Save changes"
                                </Button>
                                {move || {
                                    error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                                }}
                            </form>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
