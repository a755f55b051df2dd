//! Field groups shared by add and edit pages. Each form lives in one
//! `RwSignal`; [`bind`] and [`setter`] wire a single string field to inputs.

mod request_form;
mod user_form;

pub(crate) use request_form::RequestFields;
pub(crate) use user_form::UserFields;

use leptos::prelude::*;

/// Read side of one form field.
pub(crate) fn bind<F>(form: RwSignal<F>, field: fn(&F) -> &String) -> Signal<String>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|form| field(form).clone()))
}

/// Write side of one form field.
pub(crate) fn setter<F>(form: RwSignal<F>, field: fn(&mut F) -> &mut String) -> Callback<String>
where
    F: Send + Sync + 'static,
{
    Callback::new(move |value: String| form.update(|form| *field(form) = value))
}
