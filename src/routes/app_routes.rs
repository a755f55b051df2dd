use super::{
    contact::ContactPage,
    dashboard::{
        AddUserPage, DashboardAddRequestPage, DashboardRequestsPage, DonorsPage,
        EditNotificationPage, EditRequestPage, EditUserPage, MessagesPage, NotificationsPage,
        OverviewPage, UserDetailPage, UsersListPage,
    },
    give_blood::GiveBloodPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    register::RegisterPage,
    requests::{AddRequestPage, RequestBoardPage, RequestDetailPage},
};
use crate::{
    components::{DashboardLayout, PublicLayout},
    features::auth::RequireAccess,
};
use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Route, Routes},
    path,
};

/// Every page sits behind `RequireAccess`, so the guard comes from the route
/// table rather than from this tree.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <RequireAccess><HomePage /></RequireAccess> } />
            <Route
                path=path!("/contact")
                view=|| view! { <RequireAccess><ContactPage /></RequireAccess> }
            />
            <Route
                path=path!("/give-blood")
                view=|| view! { <RequireAccess><GiveBloodPage /></RequireAccess> }
            />
            <Route
                path=path!("/request-blood")
                view=|| view! { <RequireAccess><RequestBoardPage /></RequireAccess> }
            />
            <Route
                path=path!("/request-blood/add-request")
                view=|| {
                    view! {
                        <PublicLayout>
                            <RequireAccess>
                                <AddRequestPage />
                            </RequireAccess>
                        </PublicLayout>
                    }
                }
            />
            <Route
                path=path!("/request-blood/:id")
                view=|| view! { <RequireAccess><RequestDetailPage /></RequireAccess> }
            />
            <Route
                path=path!("/login")
                view=|| view! { <RequireAccess><LoginPage /></RequireAccess> }
            />
            <Route
                path=path!("/register")
                view=|| view! { <RequireAccess><RegisterPage /></RequireAccess> }
            />
            <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                <Route path=path!("") view=|| view! { <RequireAccess><OverviewPage /></RequireAccess> } />
                <Route
                    path=path!("users")
                    view=|| view! { <RequireAccess><UsersListPage /></RequireAccess> }
                />
                <Route
                    path=path!("users/add")
                    view=|| view! { <RequireAccess><AddUserPage /></RequireAccess> }
                />
                <Route
                    path=path!("users/details/:id")
                    view=|| view! { <RequireAccess><UserDetailPage /></RequireAccess> }
                />
                <Route
                    path=path!("users/:id")
                    view=|| view! { <RequireAccess><EditUserPage /></RequireAccess> }
                />
                <Route
                    path=path!("available-donor")
                    view=|| view! { <RequireAccess><DonorsPage /></RequireAccess> }
                />
                <Route
                    path=path!("request")
                    view=|| view! { <RequireAccess><DashboardRequestsPage /></RequireAccess> }
                />
                <Route
                    path=path!("request/add")
                    view=|| view! { <RequireAccess><DashboardAddRequestPage /></RequireAccess> }
                />
                <Route
                    path=path!("request/:id")
                    view=|| view! { <RequireAccess><EditRequestPage /></RequireAccess> }
                />
                <Route
                    path=path!("notifications")
                    view=|| view! { <RequireAccess><NotificationsPage /></RequireAccess> }
                />
                <Route
                    path=path!("notifications/:id")
                    view=|| view! { <RequireAccess><EditNotificationPage /></RequireAccess> }
                />
                <Route
                    path=path!("messages")
                    view=|| view! { <RequireAccess><MessagesPage /></RequireAccess> }
                />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
