use crate::{
    app_lib::theme::Theme, features::requests::types::BloodRequest, routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Summary card for one blood request; `children` renders owner actions.
#[component]
pub fn RequestCard(request: BloodRequest, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let status_class = if request.is_complete() {
        Theme::BADGE_SUCCESS
    } else {
        Theme::BADGE_WARNING
    };
    let urgent = request.urgency.eq_ignore_ascii_case("urgent");
    let detail_href = paths::request_detail(&request.id);

    view! {
        <article class=format!("flex flex-col gap-3 {}", Theme::CARD)>
            <div class="flex items-center justify-between">
                <span class="inline-flex h-12 w-12 items-center justify-center rounded-full bg-red-100 text-lg font-bold text-red-700">
                    {request.blood_type.clone()}
                </span>
                <div class="flex gap-2">
                    {urgent.then(|| view! { <span class=Theme::BADGE_DANGER>"Urgent"</span> })}
                    <span class=status_class>{request.done_status.label()}</span>
                </div>
            </div>
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{request.patient_name.clone()}</h3>
            <dl class="grid grid-cols-2 gap-2 text-sm text-gray-600 dark:text-gray-300">
                <dt class="text-gray-400">"Units"</dt>
                <dd>{request.quantity.clone()}</dd>
                <dt class="text-gray-400">"Donation point"</dt>
                <dd>{request.donation_point.clone()}</dd>
                <dt class="text-gray-400">"Date"</dt>
                <dd>{request.request_day().to_string()}</dd>
            </dl>
            <div class="mt-auto flex items-center justify-between pt-2">
                <A href=detail_href {..} class=Theme::LINK>"View details"</A>
                {children.map(|children| view! { <div class="flex gap-3">{children()}</div> })}
            </div>
        </article>
    }
}
