//! Donor eligibility questionnaire. Questions come from the API and are
//! answered one at a time; the collected answers are submitted once and the
//! verdict is shown for a few seconds before returning home.

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{Alert, AlertKind, PublicLayout, Spinner},
    features::{
        auth::state::use_api,
        donation::{
            client,
            types::{Answer, Eligibility, Questionnaire, RETURN_HOME_AFTER_MS},
        },
    },
    routes::paths,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const ANSWER_BUTTON: &str = "flex-1 px-5 py-3 text-sm font-semibold rounded-lg focus:ring-4 focus:outline-none disabled:opacity-60";

#[component]
pub fn GiveBloodPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let flow = RwSignal::new(None::<Questionnaire>);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (verdict, set_verdict) = signal::<Option<Eligibility>>(None);
    // Dropped with the page, which cancels a pending redirect.
    let redirect = StoredValue::new_local(None::<Timeout>);

    let questions_api = api.clone();
    let questions = LocalResource::new(move || {
        let api = questions_api.clone();
        async move { client::fetch_questions(&api).await }
    });

    Effect::new(move |_| match questions.get() {
        Some(Ok(list)) => flow.set(Some(Questionnaire::new(list))),
        Some(Err(err)) => set_error.set(Some(err)),
        None => {}
    });

    let submit_action = Action::new_local(move |answers: &Vec<Answer>| {
        let api = api.clone();
        let answers = answers.clone();
        async move { client::submit_answers(&api, &answers).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(eligibility) => {
                    set_verdict.set(Some(eligibility));
                    let navigate = navigate.clone();
                    let timeout = Timeout::new(RETURN_HOME_AFTER_MS, move || {
                        navigate(paths::HOME, Default::default());
                    });
                    redirect.set_value(Some(timeout));
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let answer = move |value: &'static str| {
        let mut completed = None;
        flow.update(|flow| {
            if let Some(flow) = flow.as_mut() {
                completed = flow.answer(value);
            }
        });
        if let Some(answers) = completed {
            submit_action.dispatch(answers);
        }
    };

    let question_view = move || {
        let current = flow.with(|flow| {
            flow.as_ref()
                .and_then(|flow| flow.current().map(|question| (question.text.clone(), flow.position())))
        });
        let empty = flow.with(|flow| flow.as_ref().is_some_and(Questionnaire::is_empty));

        if let Some(eligibility) = verdict.get() {
            let (icon, title, body) = if eligibility.eligible {
                (
                    "favorite",
                    "You can donate!",
                    "Thank you. Based on your answers you are eligible to give blood.",
                )
            } else {
                (
                    "block",
                    "Not eligible right now",
                    "Based on your answers you cannot donate at the moment. Thank you for your willingness to help.",
                )
            };
            return view! {
                <div class="text-center space-y-3">
                    <span class="material-symbols-outlined text-5xl text-red-700">{icon}</span>
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h2>
                    <p class="text-gray-500 dark:text-gray-400">{body}</p>
                    <p class="text-xs text-gray-400">"Returning to the home page shortly."</p>
                </div>
            }
            .into_any();
        }
        if submit_action.pending().get() {
            return view! { <Spinner /> }.into_any();
        }
        if empty {
            return view! { <Alert kind=AlertKind::Info message="No questions are available right now." /> }
                .into_any();
        }
        match current {
            Some((text, (position, total))) => view! {
                <div class="space-y-6">
                    <p class="text-sm font-medium text-gray-500 dark:text-gray-400">
                        {format!("Question {position} of {total}")}
                    </p>
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">{text}</h2>
                    <div class="flex gap-4">
                        <button
                            type="button"
                            class=format!("{ANSWER_BUTTON} text-white bg-red-700 hover:bg-red-800 focus:ring-red-300")
                            on:click=move |_| answer("yes")
                        >
                            "Yes"
                        </button>
                        <button
                            type="button"
                            class=format!("{ANSWER_BUTTON} text-gray-900 bg-gray-100 hover:bg-gray-200 focus:ring-gray-200")
                            on:click=move |_| answer("no")
                        >
                            "No"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
            None => view! { <Spinner /> }.into_any(),
        }
    };

    view! {
        <PublicLayout>
            <div class=format!("max-w-xl mx-auto space-y-6 {}", Theme::CARD)>
                <div class="space-y-1">
                    <h1 class=format!("text-2xl font-bold {}", Theme::BRAND_TEXT)>"Give blood"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Answer a few quick questions to check whether you can donate today."
                    </p>
                </div>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Alert kind=AlertKind::Error message=err.message().to_string() /> })
                }}
                {question_view}
            </div>
        </PublicLayout>
    }
}
