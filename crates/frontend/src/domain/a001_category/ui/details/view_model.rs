use contracts::domain::a001_category::CategoryDto;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::domain::a001_category::api;
use crate::layout::notifications::NotificationService;
use crate::shared::api_utils::Gateway;

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Load the category when editing; a failure goes back to the list
    pub fn load_if_needed(
        &self,
        id: Option<String>,
        gw: Gateway,
        notify: NotificationService,
        on_missing: Callback<()>,
    ) {
        let Some(existing_id) = id else {
            return;
        };
        // Edit mode is known before the record arrives
        self.form.update(|f| f.id = Some(existing_id.clone()));
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&gw, &existing_id).await {
                Ok(category) => vm.form.set(CategoryDto::from_category(&category)),
                Err(e) => {
                    notify.error(format!("Failed to load category: {}", e));
                    on_missing.run(());
                }
            }
            vm.is_loading.set(false);
        });
    }

    /// Validate and send the form
    pub fn save_command(&self, gw: Gateway, notify: NotificationService, on_saved: Callback<()>) {
        if self.is_saving.get_untracked() {
            return;
        }
        let mut current = self.form.get_untracked();
        current.name = current.name.trim().to_string();
        current.description = current
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            notify.error(e);
            return;
        }
        self.error.set(None);

        let vm = *self;
        let is_edit = current.id.is_some();
        vm.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save_form(&gw, &current).await;
            vm.is_saving.set(false);
            match result {
                Ok(()) => {
                    notify.success(if is_edit {
                        "Category updated successfully"
                    } else {
                        "Category created successfully"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    vm.error.set(Some(e.clone()));
                    notify.error(format!("Failed to save category: {}", e));
                }
            }
        });
    }
}
