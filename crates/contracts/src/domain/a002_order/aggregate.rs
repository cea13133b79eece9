use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::a001_category::{Category, UNKNOWN_CATEGORY};

/// Amount bounds enforced by the "new order" form
pub const AMOUNT_MIN: f64 = 1.0;
pub const AMOUNT_MAX: f64 = 10.0;

/// Minimal length of customer, source and geo on creation
pub const TEXT_MIN_LEN: usize = 2;

// ============================================================================
// Category reference
// ============================================================================

/// The API either populates the category or leaves the foreign key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCategory {
    Id(String),
    Embedded(Category),
}

impl OrderCategory {
    pub fn id(&self) -> &str {
        match self {
            OrderCategory::Id(id) => id,
            OrderCategory::Embedded(category) => &category.id,
        }
    }
}

/// Resolve the display name of an order category.
///
/// Embedded objects carry their own name. Foreign keys are looked up in
/// `categories`; `None` means the categories are not loaded yet and resolves
/// like a miss.
pub fn resolve_category_name(
    category: Option<&OrderCategory>,
    categories: Option<&[Category]>,
) -> String {
    match category {
        Some(OrderCategory::Embedded(c)) => c.display_name().to_string(),
        Some(OrderCategory::Id(id)) => categories
            .and_then(|all| all.iter().find(|c| &c.id == id))
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        None => UNKNOWN_CATEGORY.to_string(),
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Order record as served by `/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "orderId", default)]
    pub order_id: String,

    #[serde(default)]
    pub customer: String,

    #[serde(default)]
    pub category: Option<OrderCategory>,

    /// ISO date or datetime string
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub geo: String,

    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,

    #[serde(rename = "viewedAt", default, skip_serializing_if = "Option::is_none")]
    pub viewed_at: Option<String>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Order {
    pub fn category_name(&self, categories: Option<&[Category]>) -> String {
        resolve_category_name(self.category.as_ref(), categories)
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(OrderCategory::id)
    }

    pub fn order_date(&self) -> Option<NaiveDate> {
        parse_order_date(&self.date)
    }
}

/// Amounts arrive as numbers, numeric strings or null
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Parse the order date into a calendar date (UTC for datetimes).
///
/// Accepts `yyyy-MM-dd`, RFC 3339 and naive `yyyy-MM-ddTHH:mm:ss[.f]`.
pub fn parse_order_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

// ============================================================================
// Form DTO
// ============================================================================

/// Which rule set applies to [`OrderDto::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New orders: required fields, minimal lengths and the amount range
    Create,
    /// Edits: required fields only
    Update,
}

/// Body of `POST /orders` and `PUT /orders/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub customer: String,
    /// Category foreign key
    pub category: String,
    /// `yyyy-MM-dd`
    pub date: String,
    pub source: String,
    pub geo: String,
    pub amount: f64,
}

impl OrderDto {
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer: order.customer.clone(),
            category: order.category_id().unwrap_or_default().to_string(),
            date: order
                .order_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            source: order.source.clone(),
            geo: order.geo.clone(),
            amount: order.amount,
        }
    }

    pub fn validate(&self, mode: ValidationMode) -> Result<(), &'static str> {
        if self.customer.trim().is_empty() {
            return Err("Customer name is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        if self.date.trim().is_empty() {
            return Err("Order date is required");
        }
        if parse_order_date(&self.date).is_none() {
            return Err("Order date is invalid");
        }
        if self.source.trim().is_empty() {
            return Err("Source is required");
        }

        if mode == ValidationMode::Update {
            return Ok(());
        }

        if self.geo.trim().is_empty() {
            return Err("Geographic location is required");
        }
        if self.customer.trim().chars().count() < TEXT_MIN_LEN {
            return Err("Name must be at least 2 characters");
        }
        if self.source.trim().chars().count() < TEXT_MIN_LEN {
            return Err("Source must be at least 2 characters");
        }
        if self.geo.trim().chars().count() < TEXT_MIN_LEN {
            return Err("Location must be at least 2 characters");
        }
        if !(AMOUNT_MIN..=AMOUNT_MAX).contains(&self.amount) {
            return Err("Amount must be between 1 and 10");
        }
        Ok(())
    }
}

/// Parse the amount input, rounded to cents
pub fn parse_amount(input: &str) -> Result<f64, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Amount is required");
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok((value * 100.0).round() / 100.0),
        _ => Err("Amount must be a number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools() -> Category {
        Category {
            id: "c1".into(),
            category_id: "CAT-0001".into(),
            name: "Tools".into(),
            slug: "tools".into(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn valid_dto() -> OrderDto {
        OrderDto {
            customer: "Alice".into(),
            category: "c1".into(),
            date: "2024-01-05".into(),
            source: "Web".into(),
            geo: "Berlin, DE".into(),
            amount: 5.0,
        }
    }

    #[test]
    fn test_category_name_from_known_id() {
        let categories = vec![tools()];
        let cat = OrderCategory::Id("c1".into());
        assert_eq!(resolve_category_name(Some(&cat), Some(&categories)), "Tools");
    }

    #[test]
    fn test_category_name_from_unknown_id() {
        let categories = vec![tools()];
        let cat = OrderCategory::Id("missing".into());
        assert_eq!(
            resolve_category_name(Some(&cat), Some(&categories)),
            UNKNOWN_CATEGORY
        );
    }

    #[test]
    fn test_category_name_embedded() {
        let cat = OrderCategory::Embedded(tools());
        assert_eq!(resolve_category_name(Some(&cat), None), "Tools");
    }

    #[test]
    fn test_category_name_before_categories_load() {
        let cat = OrderCategory::Id("c1".into());
        assert_eq!(resolve_category_name(Some(&cat), None), UNKNOWN_CATEGORY);
        assert_eq!(resolve_category_name(None, Some(&[tools()])), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_deserialize_both_category_shapes() {
        let by_id: Order = serde_json::from_str(
            r#"{"_id":"o1","orderId":"O1","customer":"Alice","category":"c1","date":"2024-01-05","source":"Web","geo":"DE","amount":5}"#,
        )
        .unwrap();
        assert_eq!(by_id.category, Some(OrderCategory::Id("c1".into())));

        let embedded: Order = serde_json::from_str(
            r#"{"_id":"o2","category":{"_id":"c1","name":"Tools","slug":"tools"},"amount":"7.5"}"#,
        )
        .unwrap();
        assert_eq!(embedded.category_id(), Some("c1"));
        assert_eq!(embedded.category_name(None), "Tools");
        assert_eq!(embedded.amount, 7.5);
    }

    #[test]
    fn test_amount_tolerates_null() {
        let order: Order = serde_json::from_str(r#"{"_id":"o3","amount":null}"#).unwrap();
        assert_eq!(order.amount, 0.0);
        assert_eq!(order.category, None);
    }

    #[test]
    fn test_parse_order_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(parse_order_date("2024-01-05"), expected);
        assert_eq!(parse_order_date("2024-01-05T00:00:00.000Z"), expected);
        assert_eq!(parse_order_date("2024-01-05T23:10:00+00:00"), expected);
        assert_eq!(parse_order_date("2024-01-05T08:30:00"), expected);
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("yesterday"), None);
    }

    #[test]
    fn test_create_validation_rules() {
        assert!(valid_dto().validate(ValidationMode::Create).is_ok());

        let mut dto = valid_dto();
        dto.customer = "A".into();
        assert_eq!(
            dto.validate(ValidationMode::Create),
            Err("Name must be at least 2 characters")
        );

        let mut dto = valid_dto();
        dto.amount = 12.0;
        assert_eq!(
            dto.validate(ValidationMode::Create),
            Err("Amount must be between 1 and 10")
        );

        let mut dto = valid_dto();
        dto.category.clear();
        assert_eq!(dto.validate(ValidationMode::Create), Err("Category is required"));
    }

    #[test]
    fn test_update_validation_is_required_only() {
        let mut dto = valid_dto();
        dto.customer = "A".into();
        dto.amount = 250.0;
        dto.geo.clear();
        assert!(dto.validate(ValidationMode::Update).is_ok());

        dto.source = "  ".into();
        assert_eq!(dto.validate(ValidationMode::Update), Err("Source is required"));
    }

    #[test]
    fn test_parse_amount_rounds_to_cents() {
        assert_eq!(parse_amount("7.499"), Ok(7.5));
        assert_eq!(parse_amount(" 3 "), Ok(3.0));
        assert_eq!(parse_amount(""), Err("Amount is required"));
        assert_eq!(parse_amount("abc"), Err("Amount must be a number"));
    }

    #[test]
    fn test_dto_from_order_uses_foreign_key_and_short_date() {
        let order = Order {
            id: "o1".into(),
            order_id: "O1".into(),
            customer: "Alice".into(),
            category: Some(OrderCategory::Embedded(tools())),
            date: "2024-01-05T00:00:00.000Z".into(),
            source: "Web".into(),
            geo: "DE".into(),
            amount: 5.0,
            viewed_at: None,
            created_at: None,
            updated_at: None,
        };
        let dto = OrderDto::from_order(&order);
        assert_eq!(dto.category, "c1");
        assert_eq!(dto.date, "2024-01-05");
    }
}
