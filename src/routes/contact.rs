use crate::{
    app_lib::theme::Theme,
    components::{
        AlertKind, Button, Feedback, FeedbackBanner, PublicLayout, TextArea, TextField,
        forms::{bind, setter},
    },
    features::{
        auth::state::use_api,
        messages::{client, types::ContactForm},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn ContactPage() -> impl IntoView {
    let api = use_api();
    let form = RwSignal::new(ContactForm::default());
    let (feedback, set_feedback) = signal::<Feedback>(None);

    let send_action = Action::new_local(move |form: &ContactForm| {
        let api = api.clone();
        let form = form.clone();
        async move { client::send_contact(&api, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    form.set(ContactForm::default());
                    set_feedback.set(Some((
                        AlertKind::Success,
                        "Thank you! Your message has been sent.".to_string(),
                    )));
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_feedback.set(None);
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            set_feedback.set(Some((AlertKind::Error, err.message().to_string())));
            return;
        }
        send_action.dispatch(current);
    };

    view! {
        <PublicLayout>
            <div class="grid gap-10 md:grid-cols-2">
                <div class="space-y-4">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">"Contact us"</h1>
                    <p class="text-gray-500 dark:text-gray-400">
                        "Questions about donating, a request you posted, or your account? Send us a message and the RedLink team will get back to you."
                    </p>
                    <ul class="space-y-2 text-sm text-gray-600 dark:text-gray-300">
                        <li class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-red-700">"mail"</span>
                            "support@redlink.app"
                        </li>
                        <li class="flex items-center gap-2">
                            <span class="material-symbols-outlined text-red-700">"schedule"</span>
                            "Sunday to Thursday, 9:00 to 17:00"
                        </li>
                    </ul>
                </div>
                <form class=format!("space-y-5 {}", Theme::CARD) on:submit=on_submit>
                    <TextField
                        label="Name"
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
                        label="Subject"
                        id="subject"
                        required=true
                        value=bind(form, |f| &f.subject)
                        on_input=setter(form, |f| &mut f.subject)
                    />
                    <TextArea
                        label="Message"
                        id="message"
                        required=true
                        value=bind(form, |f| &f.message)
                        on_input=setter(form, |f| &mut f.message)
                    />
                    <Button button_type="submit" disabled=send_action.pending()>
                        "Send message"
                    </Button>
                    <FeedbackBanner feedback=feedback />
                </form>
            </div>
        </PublicLayout>
    }
}
