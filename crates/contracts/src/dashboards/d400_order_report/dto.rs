use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_order::Order;

/// Label for orders that carry no source
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Date range of the reports dashboard, also the query of `GET /orders/export`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    /// `yyyy-MM-dd`, empty means open
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
}

/// Bar of the "Orders by Source" chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Point of the "Revenue Trend" chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Aggregates shown on the reports dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderReport {
    /// In order of first appearance
    pub by_source: Vec<SourceCount>,
    /// Ascending by date
    pub revenue_by_day: Vec<RevenuePoint>,
    pub order_count: usize,
    pub total_revenue: f64,
}

impl OrderReport {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut by_source: Vec<SourceCount> = Vec::new();
        let mut revenue_by_day: Vec<RevenuePoint> = Vec::new();

        for order in orders {
            let source = match order.source.trim() {
                "" => UNKNOWN_SOURCE,
                s => s,
            };
            match by_source.iter_mut().find(|b| b.source == source) {
                Some(bucket) => bucket.count += 1,
                None => by_source.push(SourceCount {
                    source: source.to_string(),
                    count: 1,
                }),
            }

            // Undated orders still count towards the totals
            if let Some(date) = order.order_date() {
                match revenue_by_day.iter_mut().find(|p| p.date == date) {
                    Some(point) => point.revenue += order.amount,
                    None => revenue_by_day.push(RevenuePoint {
                        date,
                        revenue: order.amount,
                    }),
                }
            }
        }

        revenue_by_day.sort_by_key(|p| p.date);
        for point in revenue_by_day.iter_mut() {
            point.revenue = round_cents(point.revenue);
        }

        Self {
            by_source,
            revenue_by_day,
            order_count: orders.len(),
            total_revenue: round_cents(orders.iter().map(|o| o.amount).sum()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    pub fn max_source_count(&self) -> usize {
        self.by_source.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn max_revenue(&self) -> f64 {
        self.revenue_by_day
            .iter()
            .map(|p| p.revenue)
            .fold(0.0, f64::max)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, source: &str, date: &str, amount: f64) -> Order {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "source": source,
            "date": date,
            "amount": amount,
        }))
        .unwrap()
    }

    #[test]
    fn test_sources_keep_first_appearance_order() {
        let orders = vec![
            order("1", "Web", "2024-01-05", 5.0),
            order("2", "App", "2024-01-05", 2.0),
            order("3", "Web", "2024-01-06", 1.0),
            order("4", "", "2024-01-06", 1.0),
        ];
        let report = OrderReport::from_orders(&orders);
        let sources: Vec<(&str, usize)> = report
            .by_source
            .iter()
            .map(|b| (b.source.as_str(), b.count))
            .collect();
        assert_eq!(sources, vec![("Web", 2), ("App", 1), (UNKNOWN_SOURCE, 1)]);
        assert_eq!(report.max_source_count(), 2);
    }

    #[test]
    fn test_revenue_grouped_per_day_ascending() {
        let orders = vec![
            order("1", "Web", "2024-01-07T10:00:00.000Z", 3.3),
            order("2", "Web", "2024-01-05", 5.0),
            order("3", "App", "2024-01-07", 1.1),
            order("4", "App", "", 9.0),
        ];
        let report = OrderReport::from_orders(&orders);
        let days: Vec<(String, f64)> = report
            .revenue_by_day
            .iter()
            .map(|p| (p.date.to_string(), p.revenue))
            .collect();
        assert_eq!(
            days,
            vec![("2024-01-05".to_string(), 5.0), ("2024-01-07".to_string(), 4.4)]
        );
        assert_eq!(report.order_count, 4);
        assert_eq!(report.total_revenue, 18.4);
        assert_eq!(report.max_revenue(), 5.0);
    }

    #[test]
    fn test_empty_report() {
        let report = OrderReport::from_orders(&[]);
        assert!(report.is_empty());
        assert_eq!(report.max_revenue(), 0.0);
        assert_eq!(report.max_source_count(), 0);
    }

    #[test]
    fn test_filters_omit_open_bounds() {
        let filters = ReportFilters {
            start_date: "2024-01-01".into(),
            end_date: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            serde_json::json!({"startDate": "2024-01-01"})
        );
    }
}
