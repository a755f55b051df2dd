use crate::{
    app_lib::theme::Theme,
    components::{
        Alert, AlertKind, Button, PublicLayout, SelectField, Spinner, TextField,
        forms::{bind, setter},
        ui::same_label,
    },
    features::{
        auth::{client, state::use_auth, types::RegisterRequest},
        users::types::{BLOOD_TYPES, GENDERS},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};

/// Self-service donor registration. A successful sign-up is signed in right
/// away and sent to the home page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterRequest::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let api = auth.api.clone();
    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { client::register(&api, &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    auth.refresh();
                    navigate(
                        paths::HOME,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        register_action.dispatch(form.get_untracked());
    };

    view! {
        <PublicLayout>
            <div class=format!("max-w-3xl mx-auto {}", Theme::CARD)>
                <h1 class="mb-6 text-2xl font-bold text-gray-900 dark:text-white">"Create an account"</h1>
                <form class="space-y-6" on:submit=on_submit>
                    <div class="grid gap-5 md:grid-cols-2">
                        <TextField
                            label="Full name"
                            id="name"
                            required=true
                            autocomplete="name"
                            value=bind(form, |f| &f.name)
                            on_input=setter(form, |f| &mut f.name)
                        />
                        <TextField
                            label="Email"
                            id="email"
                            input_type="email"
                            required=true
                            autocomplete="email"
                            value=bind(form, |f| &f.email)
                            on_input=setter(form, |f| &mut f.email)
                        />
                        <TextField
                            label="Phone number"
                            id="phone_number"
                            input_type="tel"
                            required=true
                            autocomplete="tel"
                            value=bind(form, |f| &f.phone_number)
                            on_input=setter(form, |f| &mut f.phone_number)
                        />
                        <TextField
                            label="Date of birth"
                            id="date_of_birth"
                            input_type="date"
                            value=bind(form, |f| &f.date_of_birth)
                            on_input=setter(form, |f| &mut f.date_of_birth)
                        />
                        <SelectField
                            label="Gender"
                            id="gender"
                            placeholder="Select gender"
                            options=same_label(&GENDERS)
                            value=bind(form, |f| &f.gender)
                            on_change=setter(form, |f| &mut f.gender)
                        />
                        <SelectField
                            label="Blood type"
                            id="blood_type"
                            placeholder="Select blood type"
                            required=true
                            options=same_label(&BLOOD_TYPES)
                            value=bind(form, |f| &f.blood_type)
                            on_change=setter(form, |f| &mut f.blood_type)
                        />
                        <TextField
                            label="Address"
                            id="address"
                            autocomplete="street-address"
                            value=bind(form, |f| &f.address)
                            on_input=setter(form, |f| &mut f.address)
                        />
                        <TextField
                            label="Last donation date"
                            id="last_donation_date"
                            input_type="date"
                            value=bind(form, |f| &f.last_donation_date)
                            on_input=setter(form, |f| &mut f.last_donation_date)
                        />
                        <TextField
                            label="Password"
                            id="password"
                            input_type="password"
                            required=true
                            autocomplete="new-password"
                            value=bind(form, |f| &f.password)
                            on_input=setter(form, |f| &mut f.password)
                        />
                    </div>
                    <Button button_type="submit" disabled=register_action.pending()>
                        "Register"
                    </Button>
                    {move || register_action.pending().get().then_some(view! { <Spinner /> })}
                    {move || {
                        error.get().map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                    }}
                </form>
                <p class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class=Theme::LINK>"Sign in"</A>
                </p>
            </div>
        </PublicLayout>
    }
}
