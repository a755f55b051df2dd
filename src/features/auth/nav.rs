//! Role-filtered navigation entries for the dashboard sidebar.

use crate::{
    features::auth::{
        gate::{ADMIN_ONLY, RoleSet, STAFF},
        role::Role,
    },
    routes::paths,
};

/// Static sidebar entry. `roles` mirrors the access rule of the route at `path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Material Symbols icon name.
    pub icon: &'static str,
    pub roles: RoleSet,
}

pub const DASHBOARD_LINKS: [NavLink; 8] = [
    NavLink {
        label: "Dashboard",
        path: paths::DASHBOARD,
        icon: "dashboard",
        roles: STAFF,
    },
    NavLink {
        label: "Donors",
        path: paths::DASHBOARD_USERS,
        icon: "group",
        roles: STAFF,
    },
    NavLink {
        label: "Available Donors",
        path: paths::DASHBOARD_DONORS,
        icon: "volunteer_activism",
        roles: STAFF,
    },
    NavLink {
        label: "Add Donor",
        path: paths::DASHBOARD_USER_ADD,
        icon: "person_add",
        roles: STAFF,
    },
    NavLink {
        label: "Blood Requests",
        path: paths::DASHBOARD_REQUESTS,
        icon: "bloodtype",
        roles: STAFF,
    },
    NavLink {
        label: "Add Request",
        path: paths::DASHBOARD_REQUEST_ADD,
        icon: "add_circle",
        roles: STAFF,
    },
    NavLink {
        label: "Notifications",
        path: paths::DASHBOARD_NOTIFICATIONS,
        icon: "notifications",
        roles: ADMIN_ONLY,
    },
    NavLink {
        label: "Messages",
        path: paths::DASHBOARD_MESSAGES,
        icon: "mail",
        roles: ADMIN_ONLY,
    },
];

/// Keeps the links whose roles contain `role`, in their original order.
/// An unknown role (no token, lookup pending or failed) sees nothing.
pub fn visible_links(links: &[NavLink], role: Option<Role>) -> Vec<NavLink> {
    let Some(role) = role else {
        return Vec::new();
    };
    links
        .iter()
        .filter(|link| link.roles.contains(role))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DASHBOARD_LINKS, NavLink, visible_links};
    use crate::features::auth::{
        gate::{ADMIN_ONLY, MEMBERS, RoleSet, STAFF},
        role::Role,
    };

    fn link(path: &'static str, roles: RoleSet) -> NavLink {
        NavLink {
            label: path,
            path,
            icon: "circle",
            roles,
        }
    }

    #[test]
    fn filter_keeps_exact_ordered_sublist() {
        let links = [
            link("/a", ADMIN_ONLY),
            link("/b", MEMBERS),
            link("/c", RoleSet::new(&[Role::Donor])),
            link("/d", STAFF),
        ];

        for role in Role::ALL {
            let expected: Vec<NavLink> = links
                .iter()
                .filter(|link| link.roles.roles().contains(&role))
                .copied()
                .collect();
            assert_eq!(visible_links(&links, Some(role)), expected, "{role:?}");
        }

        let paths: Vec<_> = visible_links(&links, Some(Role::Admin))
            .iter()
            .map(|link| link.path)
            .collect();
        assert_eq!(paths, ["/a", "/b", "/d"]);
    }

    #[test]
    fn unknown_role_sees_no_links() {
        assert!(visible_links(&DASHBOARD_LINKS, None).is_empty());
        assert!(visible_links(&[link("/open", MEMBERS)], None).is_empty());
    }

    #[test]
    fn hospital_sidebar_hides_admin_sections() {
        let labels: Vec<_> = visible_links(&DASHBOARD_LINKS, Some(Role::Hospital))
            .iter()
            .map(|link| link.label)
            .collect();
        assert!(labels.contains(&"Donors"));
        assert!(!labels.contains(&"Notifications"));
        assert!(!labels.contains(&"Messages"));
        assert_eq!(visible_links(&DASHBOARD_LINKS, Some(Role::Admin)).len(), DASHBOARD_LINKS.len());
        assert!(visible_links(&DASHBOARD_LINKS, Some(Role::Donor)).is_empty());
    }
}
