//! Sidebar navigation

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Matches [`Page::section`] of the pages it covers
    pub section: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub page: Page,
    pub admin_only: bool,
}

/// Menu entries visible to the user
pub fn menu_items(is_admin: bool) -> Vec<MenuItem> {
    vec![
        MenuItem {
            section: "dashboard",
            label: "Dashboard",
            icon: "bar-chart",
            page: Page::Dashboard,
            admin_only: false,
        },
        MenuItem {
            section: "orders",
            label: "Orders",
            icon: "orders",
            page: Page::Orders,
            admin_only: false,
        },
        MenuItem {
            section: "categories",
            label: "Categories",
            icon: "tag",
            page: Page::Categories,
            admin_only: false,
        },
        MenuItem {
            section: "admin",
            label: "Admin",
            icon: "shield",
            page: Page::Admin,
            admin_only: true,
        },
    ]
    .into_iter()
    .filter(|item| is_admin || !item.admin_only)
    .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    view! {
        <nav class="app-sidebar__content">
            {move || {
                menu_items(session.is_admin())
                    .into_iter()
                    .map(|item| {
                        let section = item.section;
                        let page = StoredValue::new(item.page);
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || ctx.active.with(|p| p.section() == section)
                                on:click=move |_| ctx.navigate(page.get_value())
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_entry_only_for_admins() {
        let labels = |items: Vec<MenuItem>| items.iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(labels(menu_items(false)), vec!["Dashboard", "Orders", "Categories"]);
        assert_eq!(
            labels(menu_items(true)),
            vec!["Dashboard", "Orders", "Categories", "Admin"]
        );
    }

    #[test]
    fn test_sections_match_pages() {
        for item in menu_items(true) {
            assert_eq!(item.page.section(), item.section);
        }
    }
}
