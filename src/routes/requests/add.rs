use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, Button, Spinner, forms::RequestFields},
    features::{
        auth::state::use_api,
        requests::{client, types::RequestForm},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

/// Public "request blood" page for any signed-in member.
#[component]
pub fn AddRequestPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto">
            <AddRequestForm redirect_to=paths::REQUESTS />
        </div>
    }
}

/// Blood request form that posts a new request and then navigates to
/// `redirect_to`.
#[component]
pub fn AddRequestForm(redirect_to: &'static str) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(RequestForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let add_action = Action::new_local(move |form: &RequestForm| {
        let api = api.clone();
        let form = form.clone();
        async move { client::add_request(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(()) => navigate(redirect_to, Default::default()),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            set_error.set(Some(err.message().to_string()));
            return;
        }
        add_action.dispatch(current);
    };

    view! {
        <form class=format!("space-y-6 {}", Theme::CARD) on:submit=on_submit>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Request blood"</h1>
            <RequestFields form=form />
            <Button button_type="submit" disabled=add_action.pending()>
                "Submit request"
            </Button>
            {move || add_action.pending().get().then_some(view! { <Spinner /> })}
            {move || error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
        </form>
    }
}
