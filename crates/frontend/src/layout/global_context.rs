use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Screens of the authenticated application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Orders,
    OrderNew,
    OrderView(String),
    OrderEdit(String),
    Categories,
    CategoryNew,
    CategoryEdit(String),
    Admin,
}

/// Screens shown while nobody is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
}

/// `?page=...&id=...` mirror of the active page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Orders => "orders",
            Page::OrderNew => "order_new",
            Page::OrderView(_) => "order_view",
            Page::OrderEdit(_) => "order_edit",
            Page::Categories => "categories",
            Page::CategoryNew => "category_new",
            Page::CategoryEdit(_) => "category_edit",
            Page::Admin => "admin",
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Page::OrderView(id) | Page::OrderEdit(id) | Page::CategoryEdit(id) => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Reports & Analytics",
            Page::Orders => "Orders",
            Page::OrderNew => "New Order",
            Page::OrderView(_) => "Order Details",
            Page::OrderEdit(_) => "Edit Order",
            Page::Categories => "Categories",
            Page::CategoryNew => "New Category",
            Page::CategoryEdit(_) => "Edit Category",
            Page::Admin => "Admin",
        }
    }

    /// Sidebar section the page belongs to
    pub fn section(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Orders | Page::OrderNew | Page::OrderView(_) | Page::OrderEdit(_) => "orders",
            Page::Categories | Page::CategoryNew | Page::CategoryEdit(_) => "categories",
            Page::Admin => "admin",
        }
    }

    pub fn to_query(&self) -> PageQuery {
        PageQuery {
            page: self.key().to_string(),
            id: self.id().map(str::to_string),
        }
    }

    /// Unknown keys and pages missing their id resolve to `None`
    pub fn from_query(query: &PageQuery) -> Option<Page> {
        let id = query.id.clone().filter(|id| !id.is_empty());
        match (query.page.as_str(), id) {
            ("dashboard", _) => Some(Page::Dashboard),
            ("orders", _) => Some(Page::Orders),
            ("order_new", _) => Some(Page::OrderNew),
            ("order_view", Some(id)) => Some(Page::OrderView(id)),
            ("order_edit", Some(id)) => Some(Page::OrderEdit(id)),
            ("categories", _) => Some(Page::Categories),
            ("category_new", _) => Some(Page::CategoryNew),
            ("category_edit", Some(id)) => Some(Page::CategoryEdit(id)),
            ("admin", _) => Some(Page::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub auth_screen: RwSignal<AuthScreen>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            auth_screen: RwSignal::new(AuthScreen::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = Page::from_query(&query) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = serde_qs::to_string(&this.active.get().to_query()).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn show_auth_screen(&self, screen: AuthScreen) {
        self.auth_screen.set(screen);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_round_trip() {
        let pages = [
            Page::Dashboard,
            Page::Orders,
            Page::OrderNew,
            Page::OrderView("o1".into()),
            Page::OrderEdit("o1".into()),
            Page::Categories,
            Page::CategoryNew,
            Page::CategoryEdit("c1".into()),
            Page::Admin,
        ];
        for page in pages {
            let qs = serde_qs::to_string(&page.to_query()).unwrap();
            let parsed: PageQuery = serde_qs::from_str(&qs).unwrap();
            assert_eq!(Page::from_query(&parsed), Some(page));
        }
    }

    #[test]
    fn test_query_shape() {
        let qs = serde_qs::to_string(&Page::OrderEdit("65a1".into()).to_query()).unwrap();
        assert_eq!(qs, "page=order_edit&id=65a1");
        let qs = serde_qs::to_string(&Page::Orders.to_query()).unwrap();
        assert_eq!(qs, "page=orders");
    }

    #[test]
    fn test_unknown_or_incomplete_query() {
        let missing_id = PageQuery {
            page: "order_edit".into(),
            id: None,
        };
        assert_eq!(Page::from_query(&missing_id), None);
        assert_eq!(Page::from_query(&PageQuery::default()), None);
        let unknown = PageQuery {
            page: "settings".into(),
            id: None,
        };
        assert_eq!(Page::from_query(&unknown), None);
    }

    #[test]
    fn test_sections() {
        assert_eq!(Page::OrderView("x".into()).section(), "orders");
        assert_eq!(Page::CategoryNew.section(), "categories");
    }
}
