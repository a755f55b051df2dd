//! Labelled form controls bound to a getter signal and an input callback, so
//! a whole form can live in one `RwSignal<Form>`.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    id: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                class=Theme::INPUT
                placeholder=placeholder
                autocomplete=autocomplete.unwrap_or("off")
                required=required
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    id: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <textarea
                id=id
                name=id
                rows="4"
                class=Theme::INPUT
                required=required
                prop:value=move || value.get()
                on:input=move |event| on_input.run(event_target_value(&event))
            ></textarea>
        </div>
    }
}

/// Select over static options. `options` are `(value, label)` pairs; an empty
/// `placeholder` entry is shown first and maps to `""`.
#[component]
pub fn SelectField(
    label: &'static str,
    id: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <select
                id=id
                name=id
                class=Theme::INPUT
                required=required
                prop:value=move || value.get()
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// `(value, label)` pairs where both are the same string.
pub fn same_label(values: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    values.iter().map(|value| (*value, *value)).collect()
}
