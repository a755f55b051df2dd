//! Role gate: decides what a protected route renders.
//!
//! ## States
//!
//! - `Pending`: a token exists and `GET /user` is in flight.
//! - `Unauthenticated`: no token, or the lookup failed (401, network, unknown
//!   role). Both are handled the same way: redirect to `/login`.
//! - `Authorized`: the resolved role is in the route's allow-list.
//! - `Forbidden`: a valid user whose role is not in the allow-list. Renders the
//!   access-denied view and does not redirect.
//!
//! Membership is exact: there is no role hierarchy, so an admin only reaches a
//! route that lists `Role::Admin`. None of this is a security boundary; the API
//! enforces access on every call.

use crate::{
    app_lib::{AppError, Session},
    features::auth::{client::UserResolver, role::Role, types::CurrentUser},
    routes::paths,
};

/// Static allow-list of roles for a route or navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleSet(&'static [Role]);

impl RoleSet {
    pub const fn new(roles: &'static [Role]) -> Self {
        Self(roles)
    }

    pub fn contains(self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn roles(self) -> &'static [Role] {
        self.0
    }
}

/// Admin and hospital staff: the dashboard audience.
pub const STAFF: RoleSet = RoleSet::new(&[Role::Admin, Role::Hospital]);
pub const ADMIN_ONLY: RoleSet = RoleSet::new(&[Role::Admin]);
/// Any signed-in account.
pub const MEMBERS: RoleSet = RoleSet::new(&Role::ALL);

pub fn check_access(role: Role, allowed: RoleSet) -> bool {
    allowed.contains(role)
}

/// Outcome of resolving the current user for one mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    NoToken,
    Resolved(CurrentUser),
    Failed(AppError),
}

impl Resolution {
    /// The resolved user; guests and failed lookups have none.
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Resolution::Resolved(user) => Some(user),
            Resolution::NoToken | Resolution::Failed(_) => None,
        }
    }
}

/// Resolves the current user, skipping the network entirely without a token.
/// A token the API answers with 401 is dropped so the login page accepts the
/// visitor again.
pub async fn resolve_session<R: UserResolver>(session: &Session, resolver: &R) -> Resolution {
    if !session.has_token() {
        return Resolution::NoToken;
    }

    match resolver.resolve_current_user().await {
        Ok(user) => Resolution::Resolved(user),
        Err(err) => {
            log::debug!("current user lookup failed: {err}");
            if err.is_unauthorized() {
                session.clear_token();
            }
            Resolution::Failed(err)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    Pending,
    Unauthenticated,
    Authorized(CurrentUser),
    Forbidden(CurrentUser),
}

impl GateState {
    /// The resolved user, if any, whether or not access was granted.
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            GateState::Authorized(user) | GateState::Forbidden(user) => Some(user),
            GateState::Pending | GateState::Unauthenticated => None,
        }
    }
}

/// Derives the gate state. `resolution` is `None` while the lookup runs.
pub fn gate_state(has_token: bool, resolution: Option<&Resolution>, allowed: RoleSet) -> GateState {
    if !has_token {
        return GateState::Unauthenticated;
    }

    match resolution {
        None => GateState::Pending,
        Some(Resolution::NoToken | Resolution::Failed(_)) => GateState::Unauthenticated,
        Some(Resolution::Resolved(user)) if check_access(user.role, allowed) => {
            GateState::Authorized(user.clone())
        }
        Some(Resolution::Resolved(user)) => GateState::Forbidden(user.clone()),
    }
}

/// Guest-only pages send visitors holding a token home.
pub fn guest_redirect(has_token: bool) -> Option<&'static str> {
    has_token.then_some(paths::HOME)
}

/// Where a fresh login lands: the dashboard for roles allowed there, home otherwise.
pub fn landing_path(role: Option<Role>) -> &'static str {
    match role {
        Some(role) if check_access(role, STAFF) => paths::DASHBOARD,
        _ => paths::HOME,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ADMIN_ONLY, GateState, MEMBERS, Resolution, RoleSet, STAFF, check_access, gate_state,
        guest_redirect, landing_path, resolve_session,
    };
    use crate::{
        app_lib::{AppError, Session},
        features::auth::{client::UserResolver, role::Role, types::CurrentUser},
    };
    use std::cell::Cell;

    struct CountingResolver {
        calls: Cell<usize>,
        result: Result<CurrentUser, AppError>,
    }

    impl CountingResolver {
        fn returning(role: Role) -> Self {
            Self {
                calls: Cell::new(0),
                result: Ok(user(role)),
            }
        }

        fn failing(err: AppError) -> Self {
            Self {
                calls: Cell::new(0),
                result: Err(err),
            }
        }
    }

    impl UserResolver for CountingResolver {
        async fn resolve_current_user(&self) -> Result<CurrentUser, AppError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: "u1".to_string(),
            name: "Lina".to_string(),
            role,
            email: None,
            phone_number: None,
            blood_type: None,
            address: None,
            status: None,
        }
    }

    fn signed_in() -> Session {
        let session = Session::in_memory();
        session.set_token("token");
        session
    }

    async fn run_gate(session: &Session, resolver: &CountingResolver, allowed: RoleSet) -> GateState {
        let resolution = resolve_session(session, resolver).await;
        gate_state(session.has_token(), Some(&resolution), allowed)
    }

    #[test]
    fn access_is_exact_membership_for_every_role() {
        let sets = [STAFF, ADMIN_ONLY, MEMBERS, RoleSet::new(&[Role::Hospital]), RoleSet::new(&[])];
        for allowed in sets {
            for role in Role::ALL {
                assert_eq!(
                    check_access(role, allowed),
                    allowed.roles().contains(&role),
                    "{role:?} against {allowed:?}"
                );
            }
        }
    }

    #[test]
    fn admin_is_not_implicitly_hospital() {
        assert!(!check_access(Role::Admin, RoleSet::new(&[Role::Hospital])));
    }

    #[tokio::test]
    async fn no_token_redirects_without_calling_resolver() {
        let session = Session::in_memory();
        let resolver = CountingResolver::returning(Role::Admin);

        let state = run_gate(&session, &resolver, ADMIN_ONLY).await;

        assert_eq!(state, GateState::Unauthenticated);
        assert_eq!(resolver.calls.get(), 0);
    }

    #[tokio::test]
    async fn admin_reaches_staff_route() {
        let resolver = CountingResolver::returning(Role::Admin);

        let state = run_gate(&signed_in(), &resolver, STAFF).await;

        assert_eq!(state, GateState::Authorized(user(Role::Admin)));
        assert_eq!(resolver.calls.get(), 1);
    }

    #[tokio::test]
    async fn patient_is_forbidden_from_staff_route() {
        let resolver = CountingResolver::returning(Role::Patient);

        let state = run_gate(&signed_in(), &resolver, STAFF).await;

        assert_eq!(state, GateState::Forbidden(user(Role::Patient)));
        assert_eq!(state.user().map(|user| user.role), Some(Role::Patient));
    }

    #[tokio::test]
    async fn rejected_lookup_is_treated_like_missing_token() {
        let resolver = CountingResolver::failing(AppError::Http {
            status: 401,
            message: "Unauthenticated.".to_string(),
        });

        let session = signed_in();

        let resolution = resolve_session(&session, &resolver).await;
        let state = gate_state(true, Some(&resolution), STAFF);

        assert!(matches!(resolution, Resolution::Failed(_)));
        assert_eq!(state, GateState::Unauthenticated);
        assert_eq!(state, gate_state(session.has_token(), None, STAFF));
        assert!(!session.has_token());
        assert_eq!(resolver.calls.get(), 1);
    }

    #[tokio::test]
    async fn one_lookup_serves_navbar_and_nested_gate() {
        let resolver = CountingResolver::returning(Role::Donor);
        let session = signed_in();

        let resolution = resolve_session(&session, &resolver).await;
        let viewer = resolution.user().cloned();
        let state = gate_state(session.has_token(), Some(&resolution), MEMBERS);

        assert_eq!(viewer, Some(user(Role::Donor)));
        assert_eq!(state, GateState::Authorized(user(Role::Donor)));
        assert_eq!(resolver.calls.get(), 1);
    }

    #[tokio::test]
    async fn stale_token_leaves_navbar_signed_out() {
        let resolver = CountingResolver::failing(AppError::Http {
            status: 401,
            message: "Unauthenticated.".to_string(),
        });
        let session = signed_in();

        let resolution = resolve_session(&session, &resolver).await;

        assert_eq!(resolution.user(), None);
        assert!(!session.has_token());
        assert_eq!(Resolution::NoToken.user(), None);
    }

    #[tokio::test]
    async fn network_failure_keeps_token() {
        let resolver = CountingResolver::failing(AppError::Network("offline".to_string()));
        let session = signed_in();

        let resolution = resolve_session(&session, &resolver).await;

        assert_eq!(
            gate_state(true, Some(&resolution), STAFF),
            GateState::Unauthenticated
        );
        assert!(session.has_token());
    }

    #[test]
    fn lookup_in_flight_is_pending() {
        assert_eq!(gate_state(true, None, STAFF), GateState::Pending);
        assert_eq!(GateState::Pending.user(), None);
    }

    #[test]
    fn guests_only_pages_redirect_signed_in_visitors_home() {
        assert_eq!(guest_redirect(true), Some("/"));
        assert_eq!(guest_redirect(false), None);
    }

    #[test]
    fn login_lands_staff_on_dashboard() {
        assert_eq!(landing_path(Some(Role::Admin)), "/dashboard");
        assert_eq!(landing_path(Some(Role::Hospital)), "/dashboard");
        assert_eq!(landing_path(Some(Role::Donor)), "/");
        assert_eq!(landing_path(None), "/");
    }
}
