use contracts::domain::a001_category::Category;
use contracts::domain::a002_order::{parse_amount, OrderDto, ValidationMode};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_order::api;
use crate::layout::notifications::NotificationService;
use crate::shared::api_utils::Gateway;

/// Parse the amount input and check the form.
///
/// The returned DTO carries the amount rounded to cents.
pub fn prepare_submission(
    form: &OrderDto,
    amount_input: &str,
    mode: ValidationMode,
) -> Result<OrderDto, String> {
    let amount = parse_amount(amount_input)?;
    let dto = OrderDto {
        customer: form.customer.trim().to_string(),
        category: form.category.clone(),
        date: form.date.clone(),
        source: form.source.trim().to_string(),
        geo: form.geo.trim().to_string(),
        amount,
    };
    dto.validate(mode)?;
    Ok(dto)
}

/// ViewModel for the order form
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<OrderDto>,
    /// Raw text of the amount field
    pub amount_input: RwSignal<String>,
    pub categories: RwSignal<Vec<Category>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: StoredValue::new(id),
            form: RwSignal::new(OrderDto::default()),
            amount_input: RwSignal::new(String::new()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    pub fn mode(&self) -> ValidationMode {
        if self.is_edit_mode() {
            ValidationMode::Update
        } else {
            ValidationMode::Create
        }
    }

    /// Categories for the select; a failure leaves the select empty
    pub fn load_categories(&self, gw: Gateway) {
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            match category_api::fetch_all(&gw).await {
                Ok(list) => categories.set(list),
                Err(e) => log::error!("failed to load categories for the order form: {}", e),
            }
        });
    }

    /// Load the order when editing
    pub fn load_if_needed(&self, gw: Gateway, notify: NotificationService, on_missing: Callback<()>) {
        let Some(existing_id) = self.id.get_value() else {
            return;
        };
        let vm = *self;
        vm.is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&gw, &existing_id).await {
                Ok(order) => {
                    vm.amount_input.set(format!("{:.2}", order.amount));
                    vm.form.set(OrderDto::from_order(&order));
                }
                Err(e) => {
                    notify.error(format!("Failed to load order: {}", e));
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
        let dto = match prepare_submission(
            &self.form.get_untracked(),
            &self.amount_input.get_untracked(),
            self.mode(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.clone()));
                notify.error(e);
                return;
            }
        };
        self.error.set(None);

        let vm = *self;
        let id = self.id.get_value();
        vm.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update(&gw, id, &dto).await,
                None => api::create(&gw, &dto).await,
            };
            vm.is_saving.set(false);
            match result {
                Ok(()) => {
                    notify.success(if id.is_some() {
                        "Order updated successfully"
                    } else {
                        "Order created successfully"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    vm.error.set(Some(e.clone()));
                    notify.error(format!("Failed to save order: {}", e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> OrderDto {
        OrderDto {
            customer: "  Alice ".into(),
            category: "c1".into(),
            date: "2024-01-05".into(),
            source: "Web".into(),
            geo: "Berlin".into(),
            amount: 0.0,
        }
    }

    #[test]
    fn test_amount_rounded_and_text_trimmed() {
        let dto = prepare_submission(&form(), "5.555", ValidationMode::Create).unwrap();
        assert_eq!(dto.amount, 5.56);
        assert_eq!(dto.customer, "Alice");
    }

    #[test]
    fn test_amount_errors() {
        assert_eq!(
            prepare_submission(&form(), "", ValidationMode::Create).unwrap_err(),
            "Amount is required"
        );
        assert_eq!(
            prepare_submission(&form(), "abc", ValidationMode::Create).unwrap_err(),
            "Amount must be a number"
        );
    }

    #[test]
    fn test_range_applies_to_create_only() {
        assert_eq!(
            prepare_submission(&form(), "42", ValidationMode::Create).unwrap_err(),
            "Amount must be between 1 and 10"
        );
        assert!(prepare_submission(&form(), "42", ValidationMode::Update).is_ok());
    }

    #[test]
    fn test_missing_category() {
        let mut f = form();
        f.category.clear();
        assert_eq!(
            prepare_submission(&f, "5", ValidationMode::Update).unwrap_err(),
            "Category is required"
        );
    }
}
