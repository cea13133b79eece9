use serde::{Deserialize, Serialize};

/// Page size used when the filter carries none
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter fields that reset pagination when changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Category,
    StartDate,
    EndDate,
    Source,
    Geo,
}

/// Query of `GET /orders`.
///
/// Empty strings are left out of the query string so the API does not see
/// blank filters. `page` is 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilters {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub geo: String,
    pub page: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Default for OrderFilters {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl OrderFilters {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            source: String::new(),
            geo: String::new(),
            page: 1,
            page_size: Some(page_size),
        }
    }

    pub fn value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Category => &self.category,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
            FilterField::Source => &self.source,
            FilterField::Geo => &self.geo,
        }
    }

    /// Copy with `field` replaced and the page reset to 1
    pub fn with_field(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Search => next.search = value,
            FilterField::Category => next.category = value,
            FilterField::StartDate => next.start_date = value,
            FilterField::EndDate => next.end_date = value,
            FilterField::Source => next.source = value,
            FilterField::Geo => next.geo = value,
        }
        next.page = 1;
        next
    }

    /// Copy with only the page replaced
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Copy with a new page size; this is a filter change, so back to page 1
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page_size: Some(page_size),
            page: 1,
            ..self.clone()
        }
    }

    pub fn effective_page_size(&self) -> usize {
        self.page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Same filter, first page, large enough to hold every match
    pub fn for_export(&self, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: Some(page_size),
            ..self.clone()
        }
    }
}

/// `ceil(total / page_size)`, never below 1. A zero page size means the default.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    total.div_ceil(page_size).max(1)
}

/// 1-based "Showing X to Y" bounds for a page; `(0, 0)` when nothing matches
pub fn showing_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let from = (page.max(1) - 1) * page_size + 1;
    let to = (page.max(1) * page_size).min(total);
    (from.min(total), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FIELDS: [FilterField; 6] = [
        FilterField::Search,
        FilterField::Category,
        FilterField::StartDate,
        FilterField::EndDate,
        FilterField::Source,
        FilterField::Geo,
    ];

    #[test]
    fn test_every_filter_change_resets_page() {
        let filters = OrderFilters::default().with_page(4);
        for field in ALL_FIELDS {
            let next = filters.with_field(field, "x");
            assert_eq!(next.page, 1, "{:?} must reset the page", field);
            assert_eq!(next.value(field), "x");
        }
        assert_eq!(filters.with_page_size(25).page, 1);
    }

    #[test]
    fn test_page_change_keeps_other_fields() {
        let filters = OrderFilters::default()
            .with_field(FilterField::Search, "alice")
            .with_field(FilterField::Category, "c1");
        let next = filters.with_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(next.search, "alice");
        assert_eq!(next.category, "c1");
        assert_eq!(next.page_size, filters.page_size);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 25), 4);
        assert_eq!(total_pages(21, 0), 3);
        for total in 0..200 {
            for size in 1..30 {
                let expected = ((total as f64) / (size as f64)).ceil().max(1.0) as usize;
                assert_eq!(total_pages(total, size), expected);
            }
        }
    }

    #[test]
    fn test_effective_page_size_defaults_to_ten() {
        let mut filters = OrderFilters::default();
        filters.page_size = None;
        assert_eq!(filters.effective_page_size(), 10);
        filters.page_size = Some(0);
        assert_eq!(filters.effective_page_size(), 10);
    }

    #[test]
    fn test_showing_range() {
        assert_eq!(showing_range(1, 10, 0), (0, 0));
        assert_eq!(showing_range(1, 10, 7), (1, 7));
        assert_eq!(showing_range(2, 10, 25), (11, 20));
        assert_eq!(showing_range(3, 10, 25), (21, 25));
    }

    #[test]
    fn test_export_filter_keeps_criteria() {
        let filters = OrderFilters::default()
            .with_field(FilterField::StartDate, "2024-01-01")
            .with_page(5);
        let export = filters.for_export(10_000);
        assert_eq!(export.page, 1);
        assert_eq!(export.page_size, Some(10_000));
        assert_eq!(export.start_date, "2024-01-01");
    }

    #[test]
    fn test_serializes_camel_case_without_blanks() {
        let filters = OrderFilters::default().with_field(FilterField::StartDate, "2024-01-01");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"startDate": "2024-01-01", "page": 1, "pageSize": 10})
        );
    }
}
