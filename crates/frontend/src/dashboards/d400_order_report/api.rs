use contracts::dashboards::d400_order_report::{OrderReport, ReportFilters};
use contracts::domain::a002_order::OrderFilters;
use contracts::domain::common::ListOutcome;

use crate::domain::a002_order::api as order_api;
use crate::shared::api_utils::{with_query, Gateway};

/// Orders of the date range aggregated for the charts
pub async fn fetch_report(
    gw: &Gateway,
    range: &ReportFilters,
    page_size: usize,
) -> Result<OrderReport, String> {
    let filters = OrderFilters {
        start_date: range.start_date.clone(),
        end_date: range.end_date.clone(),
        ..OrderFilters::new(page_size)
    };
    match order_api::fetch_orders(gw, &filters).await {
        ListOutcome::Loaded { records, total } => {
            if total > records.len() {
                log::warn!(
                    "report covers {} of {} orders; raise reports.page_size",
                    records.len(),
                    total
                );
            }
            Ok(OrderReport::from_orders(&records))
        }
        ListOutcome::Failed { reason } => Err(reason),
    }
}

/// Server-rendered CSV of the date range
pub async fn export_report(gw: &Gateway, range: &ReportFilters) -> Result<String, String> {
    let path = with_query("/orders/export", range).map_err(|e| e.to_string())?;
    gw.get_text(&path).await.map_err(|e| e.to_string())
}
