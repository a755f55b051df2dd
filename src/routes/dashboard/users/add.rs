use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Button, Spinner, forms::UserFields},
    features::{
        auth::{role::Role, state::use_api},
        users::{client, types::UserForm},
    },
    routes::{dashboard::PageHeader, paths},
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

/// Staff-created account. Password and role are required here, unlike the
/// edit form.
#[component]
pub fn AddUserPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(UserForm {
        password: Some(String::new()),
        role: Some(Role::Donor),
        ..UserForm::default()
    });
    let (error, set_error) = signal::<Option<String>>(None);

    let add_action = Action::new_local(move |form: &UserForm| {
        let api = api.clone();
        let form = form.clone();
        async move { client::add_user(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(()) => navigate(paths::DASHBOARD_USERS, Default::default()),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        add_action.dispatch(form.get_untracked());
    };

    view! {
        <div class="max-w-4xl space-y-6">
            <PageHeader title="Add donor" subtitle="Create an account on behalf of a donor or member." />
            <form class=format!("space-y-6 {}", Theme::CARD) on:submit=on_submit>
                <UserFields form=form with_credentials=true />
                <Button button_type="submit" disabled=add_action.pending()>
                    "Create account"
                </Button>
                {move || add_action.pending().get().then_some(view! { <Spinner /> })}
                {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
            </form>
        </div>
    }
}
