//! Dashboard pages for accounts and donors. The list and the donor page share
//! one table, one filter bar and the same row commands.

mod add;
mod detail;
mod donors;
mod edit;
mod list;

pub use add::AddUserPage;
pub use detail::UserDetailPage;
pub use donors::DonorsPage;
pub use edit::EditUserPage;
pub use list::UsersListPage;

use crate::{
    app_lib::{AppError, theme::Theme},
    components::{
        AlertKind, Feedback, SelectField, TextField,
        confirm,
        forms::{bind, setter},
        ui::same_label,
    },
    features::{
        auth::state::use_api,
        users::{
            client,
            types::{BLOOD_TYPES, User, UserFilter, UserStatus},
        },
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone)]
enum UserCommand {
    SetStatus(String, UserStatus),
    Delete(String),
}

type CommandAction = Action<UserCommand, Result<&'static str, AppError>>;

/// Row commands; `reload` runs after each success.
fn user_commands(set_feedback: WriteSignal<Feedback>, reload: impl Fn() + 'static) -> CommandAction {
    let api = use_api();
    let action = Action::new_local(move |command: &UserCommand| {
        let api = api.clone();
        let command = command.clone();
        async move {
            match command {
                UserCommand::SetStatus(id, status) => {
                    client::set_user_status(&api, &id, status).await?;
                    Ok("Status updated.")
                }
                UserCommand::Delete(id) => {
                    client::delete_user(&api, &id).await?;
                    Ok("User deleted.")
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = action.value().get() {
            match result {
                Ok(message) => {
                    set_feedback.set(Some((AlertKind::Success, message.to_string())));
                    reload();
                }
                Err(err) => set_feedback.set(Some((AlertKind::Error, err.message().to_string()))),
            }
        }
    });

    action
}

#[component]
fn UserFilters(filter: RwSignal<UserFilter>) -> impl IntoView {
    view! {
        <div class="grid gap-4 md:grid-cols-3">
            <TextField
                label="Name"
                id="filter_name"
                placeholder="Search by name"
                value=bind(filter, |f| &f.name)
                on_input=setter(filter, |f| &mut f.name)
            />
            <SelectField
                label="Blood type"
                id="filter_blood_type"
                placeholder="All blood types"
                options=same_label(&BLOOD_TYPES)
                value=bind(filter, |f| &f.blood_type)
                on_change=setter(filter, |f| &mut f.blood_type)
            />
            <TextField
                label="Address"
                id="filter_address"
                placeholder="Search by address"
                value=bind(filter, |f| &f.address)
                on_input=setter(filter, |f| &mut f.address)
            />
        </div>
    }
}

fn status_badge(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => Theme::BADGE_SUCCESS,
        UserStatus::Pending => Theme::BADGE_WARNING,
        UserStatus::Inactive | UserStatus::Banned => Theme::BADGE_DANGER,
    }
}

/// Account table. The row of the signed-in user is marked "(You)" and has
/// no status or delete controls.
#[component]
fn UserTable(users: Vec<User>, self_id: String, commands: CommandAction) -> impl IntoView {
    if users.is_empty() {
        return view! {
            <p class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">"No users found."</p>
        }
        .into_any();
    }

    let rows = users
        .into_iter()
        .map(|user| {
            let is_self = user.id == self_id;
            let id = user.id.clone();
            let status = user.status;
            let name = if is_self {
                format!("{} (You)", user.name)
            } else {
                user.name.clone()
            };

            view! {
                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                    <td class=format!("{} font-medium text-gray-900 dark:text-white", Theme::TD)>
                        <A href=paths::user_detail(&user.id) {..} class=Theme::LINK>{name}</A>
                    </td>
                    <td class=Theme::TD>{user.email.clone()}</td>
                    <td class=Theme::TD>{user.phone_number.clone()}</td>
                    <td class=Theme::TD>{user.blood_type.clone()}</td>
                    <td class=Theme::TD>{user.role_label()}</td>
                    <td class=Theme::TD>
                        {if is_self {
                            view! { <span class=status_badge(status)>{status.label()}</span> }.into_any()
                        } else {
                            let status_id = id.clone();
                            view! {
                                <select
                                    class="rounded-lg border border-gray-300 bg-gray-50 p-1.5 text-sm dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                                    aria-label="Status"
                                    on:change=move |event| {
                                        let next = UserStatus::parse(&event_target_value(&event));
                                        commands.dispatch(UserCommand::SetStatus(status_id.clone(), next));
                                    }
                                >
                                    {UserStatus::ALL
                                        .into_iter()
                                        .map(|option| {
                                            view! {
                                                <option value=option.as_str() selected=option == status>
                                                    {option.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            }
                                .into_any()
                        }}
                    </td>
                    <td class=format!("{} text-right space-x-3", Theme::TD)>
                        <A href=paths::user_edit(&user.id) {..} class=Theme::ROW_ACTION>"Edit"</A>
                        {(!is_self)
                            .then(|| {
                                let toggle_id = id.clone();
                                let delete_id = id.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=Theme::ROW_ACTION
                                        on:click=move |_| {
                                            commands.dispatch(UserCommand::SetStatus(toggle_id.clone(), status.toggled()));
                                        }
                                    >
                                        {status.toggled().label()}
                                    </button>
                                    <button
                                        type="button"
                                        class=Theme::DANGER_ACTION
                                        on:click=move |_| {
                                            if confirm("Delete this user?") {
                                                commands.dispatch(UserCommand::Delete(delete_id.clone()));
                                            }
                                        }
                                    >
                                        "Delete"
                                    </button>
                                }
                            })}
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
            <thead class="bg-gray-50 dark:bg-gray-900/50">
                <tr>
                    <th scope="col" class=Theme::TH>"Name"</th>
                    <th scope="col" class=Theme::TH>"Email"</th>
                    <th scope="col" class=Theme::TH>"Phone"</th>
                    <th scope="col" class=Theme::TH>"Blood type"</th>
                    <th scope="col" class=Theme::TH>"Role"</th>
                    <th scope="col" class=Theme::TH>"Status"</th>
                    <th scope="col" class=Theme::TH>
                        <span class="sr-only">"Actions"</span>
                    </th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">{rows}</tbody>
        </table>
    }
    .into_any()
}
