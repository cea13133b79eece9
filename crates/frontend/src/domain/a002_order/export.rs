use chrono::NaiveDate;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_order::{Order, OrderFilters};
use contracts::domain::common::ListOutcome;

use super::api;
use crate::shared::api_utils::Gateway;
use crate::shared::export::{build_csv, download_text, CsvExportable, CSV_MIME};

/// One line of the orders CSV
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCsvRow {
    pub order_id: String,
    pub customer: String,
    pub category: String,
    pub date: String,
    pub source: String,
    pub amount: f64,
}

impl OrderCsvRow {
    pub fn from_order(order: &Order, categories: Option<&[Category]>) -> Self {
        Self {
            order_id: order.order_id.clone(),
            customer: order.customer.clone(),
            category: order.category_name(categories),
            date: order
                .order_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            source: order.source.clone(),
            amount: order.amount,
        }
    }
}

impl CsvExportable for OrderCsvRow {
    fn headers() -> Vec<&'static str> {
        vec!["Order ID", "Customer", "Category", "Date", "Source", "Amount"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer.clone(),
            self.category.clone(),
            self.date.clone(),
            self.source.clone(),
            format!("{:.2}", self.amount),
        ]
    }
}

pub fn orders_csv(orders: &[Order], categories: Option<&[Category]>) -> String {
    let rows: Vec<OrderCsvRow> = orders
        .iter()
        .map(|o| OrderCsvRow::from_order(o, categories))
        .collect();
    build_csv(&rows)
}

pub fn export_filename(prefix: &str, today: NaiveDate) -> String {
    format!("{}-{}.csv", prefix, today.format("%Y-%m-%d"))
}

/// Pages of an export, gathered until the server's `total` is covered
#[derive(Debug, Default)]
pub struct ExportPages {
    orders: Vec<Order>,
    total: usize,
}

impl ExportPages {
    /// Adds one page; `true` while more pages are needed.
    ///
    /// An empty page ends the export even when `total` is not reached.
    pub fn push(&mut self, records: Vec<Order>, total: usize) -> bool {
        let exhausted = records.is_empty();
        self.total = self.total.max(total);
        self.orders.extend(records);
        !exhausted && self.orders.len() < self.total
    }

    /// Orders the server counted but never returned
    pub fn missing(&self) -> usize {
        self.total.saturating_sub(self.orders.len())
    }

    pub fn finish(self) -> Result<Vec<Order>, String> {
        match self.missing() {
            0 => Ok(self.orders),
            missing => Err(format!(
                "received {} of {} orders ({} missing)",
                self.orders.len(),
                self.total,
                missing
            )),
        }
    }
}

/// Re-run the list query for every matching order and download it as CSV.
///
/// The server may cap the page size, so pages are requested until all
/// matching orders have arrived. Returns the number of exported orders.
pub async fn export_orders(
    gw: &Gateway,
    filters: &OrderFilters,
    export_page_size: usize,
    categories: Option<&[Category]>,
) -> Result<usize, String> {
    let mut query = filters.for_export(export_page_size);
    let mut pages = ExportPages::default();
    loop {
        let more = match api::fetch_orders(gw, &query).await {
            ListOutcome::Loaded { records, total } => pages.push(records, total),
            ListOutcome::Failed { reason } => return Err(reason),
        };
        if !more {
            break;
        }
        query = query.with_page(query.page + 1);
        log::debug!("export continues with page {}", query.page);
    }
    let orders = pages.finish()?;

    let csv = orders_csv(&orders, categories);
    let filename = export_filename("orders", chrono::Local::now().date_naive());
    download_text(&csv, &filename, CSV_MIME)?;
    log::info!("exported {} orders to {}", orders.len(), filename);
    Ok(orders.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_order::OrderCategory;

    fn tools() -> Category {
        serde_json::from_value(serde_json::json!({"_id": "c1", "name": "Tools"})).unwrap()
    }

    fn order(order_id: &str, customer: &str, date: &str, source: &str, amount: f64) -> Order {
        serde_json::from_value(serde_json::json!({
            "_id": order_id.to_lowercase(),
            "orderId": order_id,
            "customer": customer,
            "category": "c1",
            "date": date,
            "source": source,
            "geo": "DE",
            "amount": amount,
        }))
        .unwrap()
    }

    #[test]
    fn test_two_order_export() {
        let categories = vec![tools()];
        let orders = vec![
            order("O1", "Alice", "2024-01-05", "Web", 5.0),
            order("O2", "Bob", "2024-01-06T00:00:00.000Z", "App", 7.5),
        ];
        assert_eq!(
            orders_csv(&orders, Some(&categories)),
            "Order ID,Customer,Category,Date,Source,Amount\n\
             O1,Alice,Tools,2024-01-05,Web,5.00\n\
             O2,Bob,Tools,2024-01-06,App,7.50"
        );
    }

    #[test]
    fn test_unresolved_category_and_missing_date() {
        let mut o = order("O3", "Carol", "", "Web", 1.0);
        o.category = Some(OrderCategory::Id("gone".into()));
        let row = OrderCsvRow::from_order(&o, Some(&[tools()]));
        assert_eq!(row.category, "Unknown Category");
        assert_eq!(row.date, "");
    }

    #[test]
    fn test_export_filename() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_filename("orders", day), "orders-2024-03-09.csv");
        assert_eq!(export_filename("reports", day), "reports-2024-03-09.csv");
    }

    #[test]
    fn test_export_pages_follow_capped_server() {
        let batch = |n: usize| -> Vec<Order> {
            (0..n)
                .map(|i| order(&format!("O{}", i), "Alice", "2024-01-05", "Web", 5.0))
                .collect()
        };
        let mut pages = ExportPages::default();
        assert!(pages.push(batch(100), 250));
        assert!(pages.push(batch(100), 250));
        assert!(!pages.push(batch(50), 250));
        assert_eq!(pages.missing(), 0);
        assert_eq!(pages.finish().unwrap().len(), 250);
    }

    #[test]
    fn test_export_pages_report_shortfall() {
        let mut pages = ExportPages::default();
        assert!(pages.push(vec![order("O1", "Alice", "2024-01-05", "Web", 5.0)], 3));
        assert!(!pages.push(Vec::new(), 3));
        assert_eq!(pages.missing(), 2);
        assert_eq!(
            pages.finish().unwrap_err(),
            "received 1 of 3 orders (2 missing)"
        );
    }

    #[test]
    fn test_export_pages_single_page() {
        let mut pages = ExportPages::default();
        assert!(!pages.push(Vec::new(), 0));
        assert!(pages.finish().unwrap().is_empty());
    }
}
