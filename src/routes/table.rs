//! Declarative access table for every route the app serves. Each page in the
//! Leptos route tree sits behind `RequireAccess`, which looks its path up here,
//! and the dashboard frame takes its audience from the `/dashboard` entry.

use crate::features::auth::{
    gate::{ADMIN_ONLY, MEMBERS, RoleSet, STAFF},
    role::Role,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Only visitors without a token; others are sent home.
    GuestOnly,
    Roles(RoleSet),
}

impl Access {
    /// Whether a visitor with `role` (`None` when signed out or unresolved)
    /// may see the page.
    pub fn permits(self, role: Option<Role>) -> bool {
        match self {
            Access::Public => true,
            Access::GuestOnly => role.is_none(),
            Access::Roles(allowed) => role.is_some_and(|role| allowed.contains(role)),
        }
    }
}

/// Path patterns in match order. Static segments are listed before the
/// `:param` pattern they would otherwise collide with.
pub const ROUTES: &[(&str, Access)] = &[
    ("/", Access::Public),
    ("/contact", Access::Public),
    ("/give-blood", Access::Public),
    ("/request-blood", Access::Public),
    ("/request-blood/add-request", Access::Roles(MEMBERS)),
    ("/request-blood/:id", Access::Public),
    ("/login", Access::GuestOnly),
    ("/register", Access::GuestOnly),
    ("/dashboard", Access::Roles(STAFF)),
    ("/dashboard/users", Access::Roles(STAFF)),
    ("/dashboard/users/add", Access::Roles(STAFF)),
    ("/dashboard/users/details/:id", Access::Roles(STAFF)),
    ("/dashboard/users/:id", Access::Roles(STAFF)),
    ("/dashboard/available-donor", Access::Roles(STAFF)),
    ("/dashboard/request", Access::Roles(STAFF)),
    ("/dashboard/request/add", Access::Roles(STAFF)),
    ("/dashboard/request/:id", Access::Roles(STAFF)),
    ("/dashboard/notifications", Access::Roles(ADMIN_ONLY)),
    ("/dashboard/notifications/:id", Access::Roles(ADMIN_ONLY)),
    ("/dashboard/messages", Access::Roles(ADMIN_ONLY)),
];

/// Matches one pattern against a concrete path. `:name` segments match any
/// single non-empty segment; a trailing slash is ignored.
pub fn matches(pattern: &str, path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut expected = pattern.split('/').filter(|segment| !segment.is_empty());
    let mut actual = path.split('/').filter(|segment| !segment.is_empty());

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(want), Some(got)) if want.starts_with(':') || want == got => {}
            _ => return false,
        }
    }
}

/// Access rule for a concrete path, `None` for unknown paths (404).
pub fn access_for(path: &str) -> Option<Access> {
    ROUTES
        .iter()
        .find(|(pattern, _)| matches(pattern, path))
        .map(|(_, access)| *access)
}

/// Roles admitted by a gated path; `None` for public, guest-only and unknown paths.
pub fn roles_for(path: &str) -> Option<RoleSet> {
    match access_for(path)? {
        Access::Roles(allowed) => Some(allowed),
        Access::Public | Access::GuestOnly => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{Access, ROUTES, access_for, matches, roles_for};
    use crate::{
        features::auth::{
            gate::{ADMIN_ONLY, MEMBERS, STAFF},
            nav::DASHBOARD_LINKS,
            role::Role,
        },
        routes::paths,
    };

    #[test]
    fn patterns_match_whole_paths_only() {
        assert!(matches("/", "/"));
        assert!(matches("/dashboard", "/dashboard/"));
        assert!(matches("/request-blood/:id", "/request-blood/abc123"));
        assert!(matches("/request-blood", "/request-blood?page=2"));
        assert!(!matches("/request-blood/:id", "/request-blood"));
        assert!(!matches("/dashboard", "/dashboard/users"));
        assert!(!matches("/", "/contact"));
    }

    #[test]
    fn public_pages_need_no_role() {
        for path in ["/", "/contact", "/give-blood", "/request-blood", "/request-blood/r1"] {
            assert_eq!(access_for(path), Some(Access::Public), "{path}");
        }
    }

    #[test]
    fn add_request_is_not_mistaken_for_a_request_id() {
        assert_eq!(access_for(paths::ADD_REQUEST), Some(Access::Roles(MEMBERS)));
    }

    #[test]
    fn dashboard_sections_have_expected_audiences() {
        assert_eq!(access_for("/dashboard"), Some(Access::Roles(STAFF)));
        assert_eq!(access_for("/dashboard/users/u1"), Some(Access::Roles(STAFF)));
        assert_eq!(access_for("/dashboard/users/details/u1"), Some(Access::Roles(STAFF)));
        assert_eq!(access_for("/dashboard/request/r1"), Some(Access::Roles(STAFF)));
        assert_eq!(access_for("/dashboard/notifications/n1"), Some(Access::Roles(ADMIN_ONLY)));
        assert_eq!(access_for("/dashboard/messages"), Some(Access::Roles(ADMIN_ONLY)));
    }

    #[test]
    fn unknown_paths_have_no_rule() {
        assert_eq!(access_for("/settings"), None);
        assert_eq!(access_for("/dashboard/users/a/b/c"), None);
    }

    #[test]
    fn guest_pages_reject_signed_in_roles() {
        for path in [paths::LOGIN, paths::REGISTER] {
            let access = access_for(path).expect("known");
            assert!(access.permits(None));
            for role in Role::ALL {
                assert!(!access.permits(Some(role)));
            }
        }
    }

    #[test]
    fn gated_routes_never_admit_unknown_users() {
        for (pattern, access) in ROUTES {
            if let Access::Roles(_) = access {
                assert!(!access.permits(None), "{pattern}");
            }
        }
    }

    #[test]
    fn sidebar_links_share_route_role_sets() {
        for link in DASHBOARD_LINKS {
            assert_eq!(access_for(link.path), Some(Access::Roles(link.roles)), "{}", link.path);
        }
    }

    #[test]
    fn dashboard_pages_are_no_wider_than_the_frame() {
        let frame = roles_for(paths::DASHBOARD).expect("dashboard is gated");
        let nested = ROUTES
            .iter()
            .filter(|(pattern, _)| pattern.starts_with("/dashboard/"));
        for (pattern, _) in nested {
            let allowed = roles_for(pattern).expect("dashboard pages are gated");
            for role in allowed.roles() {
                assert!(frame.contains(*role), "{pattern} admits {role:?}");
            }
        }
    }

    #[test]
    fn only_gated_paths_have_roles() {
        assert_eq!(roles_for(paths::HOME), None);
        assert_eq!(roles_for(paths::LOGIN), None);
        assert_eq!(roles_for("/settings"), None);
        assert_eq!(roles_for(paths::ADD_REQUEST), Some(MEMBERS));
    }

    #[test]
    fn path_builders_resolve_to_known_routes() {
        for path in [
            paths::request_detail("r1"),
            paths::user_edit("u1"),
            paths::user_detail("u1"),
            paths::request_edit("r1"),
            paths::notification_edit("n1"),
        ] {
            assert!(access_for(&path).is_some(), "{path}");
        }
    }
}
