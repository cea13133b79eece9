use serde::{Deserialize, Serialize};

/// Display name used whenever an order's category cannot be resolved
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Minimal length of a category name accepted by the form
pub const NAME_MIN_LEN: usize = 2;

// ============================================================================
// Aggregate
// ============================================================================

/// Product category as served by `/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Human readable sequence id assigned by the API (e.g. "CAT-0001")
    #[serde(rename = "categoryId", default)]
    pub category_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Category {
    /// Case-insensitive match against name or description.
    /// An empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or(false)
    }

    /// Name for display; blank names fall back to [`UNKNOWN_CATEGORY`]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNKNOWN_CATEGORY
        } else {
            &self.name
        }
    }
}

/// Client-side search used by the categories list
pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.matches_search(query))
        .cloned()
        .collect()
}

// ============================================================================
// Form DTO
// ============================================================================

/// Body of `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryDto {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Category name is required");
        }
        if name.chars().count() < NAME_MIN_LEN {
            return Err("Name must be at least 2 characters");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str, description: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            category_id: format!("CAT-{}", id),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: description.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "_id": "65a1",
            "categoryId": "CAT-0001",
            "name": "Tools",
            "slug": "tools",
            "createdAt": "2024-01-05T10:00:00.000Z",
            "updatedAt": "2024-01-06T10:00:00.000Z"
        }"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "65a1");
        assert_eq!(c.category_id, "CAT-0001");
        assert_eq!(c.description, None);
        assert_eq!(c.created_at.as_deref(), Some("2024-01-05T10:00:00.000Z"));
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let items = vec![
            category("1", "Tools", Some("Hand and power tools")),
            category("2", "Garden", None),
            category("3", "Paint", Some("Wall POWER coatings")),
        ];
        let found: Vec<String> = filter_categories(&items, "power")
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(found, vec!["1", "3"]);
        assert_eq!(filter_categories(&items, "GARD").len(), 1);
        assert_eq!(filter_categories(&items, "  ").len(), 3);
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = CategoryDto::default();
        assert_eq!(dto.validate(), Err("Category name is required"));
        dto.name = "A".into();
        assert_eq!(dto.validate(), Err("Name must be at least 2 characters"));
        dto.name = "Ab".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_serializes_without_id() {
        let dto = CategoryDto {
            id: Some("65a1".into()),
            name: "Tools".into(),
            description: None,
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"name":"Tools"}"#);
    }
}
