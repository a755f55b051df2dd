use super::{bind, setter};
use crate::{
    components::ui::{SelectField, TextField, same_label},
    features::{
        auth::role::Role,
        users::types::{BLOOD_TYPES, GENDERS, UserForm},
    },
};
use leptos::prelude::*;

/// Inputs for an account. `with_credentials` adds password and role, which
/// only the add form sends.
#[component]
pub fn UserFields(form: RwSignal<UserForm>, #[prop(optional)] with_credentials: bool) -> impl IntoView {
    let role_options: Vec<(&'static str, &'static str)> =
        Role::ALL.iter().map(|role| (role.code(), role.label())).collect();
    let role_value = Signal::derive(move || {
        form.with(|form| form.role.map(Role::code).unwrap_or_default().to_string())
    });
    let password_value =
        Signal::derive(move || form.with(|form| form.password.clone().unwrap_or_default()));

    view! {
        <div class="grid gap-5 md:grid-cols-2">
            <TextField
                label="Full name"
                id="name"
                required=true
                value=bind(form, |f| &f.name)
                on_input=setter(form, |f| &mut f.name)
            />
            <TextField
                label="Email"
                id="email"
                input_type="email"
                required=true
                value=bind(form, |f| &f.email)
                on_input=setter(form, |f| &mut f.email)
            />
            <TextField
                label="Phone number"
                id="phone_number"
                input_type="tel"
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
                options=same_label(&BLOOD_TYPES)
                value=bind(form, |f| &f.blood_type)
                on_change=setter(form, |f| &mut f.blood_type)
            />
            <TextField
                label="Address"
                id="address"
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
            <Show when=move || with_credentials>
                <TextField
                    label="Password"
                    id="password"
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                    value=password_value
                    on_input=move |value: String| form.update(|form| form.password = Some(value))
                />
                <SelectField
                    label="Role"
                    id="role"
                    required=true
                    placeholder="Select role"
                    options=role_options.clone()
                    value=role_value
                    on_change=move |code: String| form.update(|form| form.role = Role::from_code(&code))
                />
            </Show>
        </div>
    }
}
