//! Route guards. These are UX-only; real access control must live on the API.

use crate::{
    components::Spinner,
    features::auth::{
        gate::{GateState, Resolution, RoleSet, gate_state, guest_redirect, resolve_session},
        state::{CurrentUserContext, SessionLookup, use_auth},
    },
    routes::{
        ForbiddenContent, paths,
        table::{Access, access_for},
    },
};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Renders `children` only for signed-in users whose role is in `allowed`.
///
/// The user is resolved once per mount. When an outer gate already resolved
/// it, or the enclosing layout is looking it up, that result is reused and no
/// second lookup is made.
#[component]
pub fn RequireRole(allowed: RoleSet, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let known = use_context::<CurrentUserContext>();
    let shared = use_context::<SessionLookup>();
    let has_token = auth.session().has_token();

    let state: Signal<GateState> = match (known, shared) {
        (Some(CurrentUserContext(user)), _) => {
            let state = gate_state(has_token, Some(&Resolution::Resolved(user)), allowed);
            Signal::derive(move || state.clone())
        }
        (None, Some(SessionLookup(lookup))) => {
            Signal::derive(move || gate_state(has_token, lookup.get().as_ref(), allowed))
        }
        (None, None) => {
            let api = auth.api.clone();
            let resolution = LocalResource::new(move || {
                let api = api.clone();
                async move {
                    if has_token {
                        resolve_session(api.session(), &api).await
                    } else {
                        Resolution::NoToken
                    }
                }
            });
            Signal::derive(move || gate_state(has_token, resolution.get().as_ref(), allowed))
        }
    };

    Effect::new(move |_| {
        if state.get() == GateState::Unauthenticated {
            auth.refresh();
            navigate(paths::LOGIN, replace());
        }
    });

    view! {
        {move || match state.get() {
            GateState::Pending => {
                view! {
                    <div class="flex justify-center py-12">
                        <Spinner />
                    </div>
                }
                    .into_any()
            }
            GateState::Unauthenticated => ().into_any(),
            GateState::Forbidden(_) => view! { <ForbiddenContent /> }.into_any(),
            GateState::Authorized(user) => {
                provide_context(CurrentUserContext(user));
                children().into_any()
            }
        }}
    }
}

/// Keeps signed-in visitors away from the login and register pages.
#[component]
pub fn RequireGuest(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let signed_in = auth.signed_in;

    // Decided once on mount; the login and register pages navigate on their
    // own after storing a token.
    let target = guest_redirect(signed_in.get_untracked());
    Effect::new(move |_| {
        if let Some(target) = target {
            navigate(target, replace());
        }
    });

    view! {
        <Show when=move || !signed_in.get()>
            {children()}
        </Show>
    }
}

/// Applies the access rule the route table lists for the current path. Paths
/// without a rule are refused.
#[component]
pub fn RequireAccess(children: ChildrenFn) -> impl IntoView {
    let path = use_location().pathname.get_untracked();

    match access_for(&path) {
        Some(Access::Public) => children().into_any(),
        Some(Access::GuestOnly) => view! { <RequireGuest>{children()}</RequireGuest> }.into_any(),
        Some(Access::Roles(allowed)) => {
            view! { <RequireRole allowed=allowed>{children()}</RequireRole> }.into_any()
        }
        None => {
            log::warn!("no access rule for {path}");
            view! { <ForbiddenContent /> }.into_any()
        }
    }
}
