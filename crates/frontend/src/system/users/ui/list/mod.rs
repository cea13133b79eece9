use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_gateway;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

/// Admins first, then by display name (case-insensitive)
pub fn sort_users(users: &mut [UserInfo]) {
    users.sort_by(|a, b| match (a.is_admin(), b.is_admin()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase()),
    });
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let notify = use_notifications();
    let gw = StoredValue::new(use_gateway());
    let (users, set_users) = signal(Vec::<UserInfo>::new());
    let (loading, set_loading) = signal(true);
    let (seeding, set_seeding) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_users(&gw).await {
                Ok(mut list) => {
                    sort_users(&mut list);
                    set_users.set(list);
                }
                Err(e) => notify.error(format!("Failed to fetch users: {}", e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let on_seed = move |_| {
        set_seeding.set(true);
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match api::seed_admin(&gw).await {
                Ok(resp) if resp.ok => {
                    notify.success("Admin account seeded");
                    fetch();
                }
                Ok(_) => notify.info("Admin account already exists"),
                Err(e) => notify.error(format!("Failed to seed admin: {}", e)),
            }
            set_seeding.set(false);
        });
    };

    view! {
        <PageFrame page_id="sys_users--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Admin" subtitle="Manage users and system settings".to_string() icon_name="shield">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=on_seed
                    disabled=Signal::derive(move || seeding.get())
                >
                    {icon("users")}
                    {move || if seeding.get() { " Seeding..." } else { " Seed admin" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /> " Loading users..."</div> }
                >
                    <div class="table-card">
                        <div class="table-card__header">
                            <h3>{move || format!("Users ({})", users.with(Vec::len))}</h3>
                        </div>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th>"Created"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || users.get()
                                    key=|u| u.id.clone()
                                    children=|user| {
                                        let created = user
                                            .created_at
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_default();
                                        let (badge, label) = match user.role {
                                            Role::Admin => (BadgeColor::Danger, "admin"),
                                            Role::User => (BadgeColor::Brand, "user"),
                                        };
                                        view! {
                                            <tr>
                                                <td class="data-table__strong">{user.display_name()}</td>
                                                <td>{user.email.clone()}</td>
                                                <td><Badge color=badge>{label}</Badge></td>
                                                <td>{created}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, role: &str) -> UserInfo {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "lastname": "",
            "email": format!("{}@x.io", id),
            "role": role,
        }))
        .unwrap()
    }

    #[test]
    fn test_admins_first_then_by_name() {
        let mut users = vec![
            user("1", "zoe", "user"),
            user("2", "Bob", "admin"),
            user("3", "amy", "user"),
        ];
        sort_users(&mut users);
        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
