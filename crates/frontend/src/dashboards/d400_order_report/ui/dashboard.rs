use contracts::dashboards::d400_order_report::{OrderReport, ReportFilters};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::charts::{RevenueLineChart, SourceBarChart};
use crate::dashboards::d400_order_report::api;
use crate::domain::a002_order::export::export_filename;
use crate::domain::a002_order::ui::list::state::RequestSequencer;
use crate::layout::notifications::use_notifications;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::config::config;
use crate::shared::date_utils::format_amount;
use crate::shared::export::{download_text, CSV_MIME};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_gateway;

/// Reports dashboard: orders by source, revenue per day and totals
#[component]
pub fn OrderReportDashboard() -> impl IntoView {
    let notify = use_notifications();
    let gw = StoredValue::new(use_gateway());
    let page_size = config().reports.page_size;

    let (range, set_range) = signal(ReportFilters::default());
    let (report, set_report) = signal(OrderReport::default());
    let (loading, set_loading) = signal(true);
    let (exporting, set_exporting) = signal(false);
    let sequencer = StoredValue::new(RequestSequencer::default());

    // Every change of the date range refetches
    Effect::new(move |_| {
        let current = range.get();
        let mut ticket = 0;
        sequencer.update_value(|s| ticket = s.issue());
        set_loading.set(true);

        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_report(&gw, &current, page_size).await;
            if !sequencer.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropped stale report response #{}", ticket);
                return;
            }
            match result {
                Ok(data) => set_report.set(data),
                Err(e) => notify.error(format!("Failed to fetch report data: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let on_export = move |_| {
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        let current = range.get_untracked();
        set_exporting.set(true);
        spawn_local(async move {
            let result = match api::export_report(&gw, &current).await {
                Ok(csv) => {
                    let filename = export_filename("reports", chrono::Local::now().date_naive());
                    download_text(&csv, &filename, CSV_MIME)
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => notify.success("Report exported successfully"),
                Err(e) => notify.error(format!("Failed to export report: {}", e)),
            }
            set_exporting.set(false);
        });
    };

    let by_source = Signal::derive(move || report.with(|r| r.by_source.clone()));
    let revenue = Signal::derive(move || report.with(|r| r.revenue_by_day.clone()));

    view! {
        <PageFrame page_id="d400_order_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Reports"
                subtitle="Analyze order trends and performance".to_string()
                icon_name="bar-chart"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_export
                    disabled=Signal::derive(move || exporting.get())
                >
                    {icon("download")}
                    {move || if exporting.get() { " Exporting..." } else { " Export Report" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <h3 class="filter-panel__title">{icon("calendar")} " Date Range"</h3>
                    <div class="filter-panel__grid">
                        <div class="form-group">
                            <label>"Start Date"</label>
                            <input
                                type="date"
                                prop:value=move || range.with(|r| r.start_date.clone())
                                on:input=move |ev| set_range.update(|r| r.start_date = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"End Date"</label>
                            <input
                                type="date"
                                prop:value=move || range.with(|r| r.end_date.clone())
                                on:input=move |ev| set_range.update(|r| r.end_date = event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || report.with(|r| r.order_count.to_string()))
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="trending-up"
                        value=Signal::derive(move || report.with(|r| format_amount(r.total_revenue)))
                    />
                    <StatCard
                        label="Sources"
                        icon_name="bar-chart"
                        value=Signal::derive(move || report.with(|r| r.by_source.len().to_string()))
                    />
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /> " Loading report..."</div> }
                >
                    <Show
                        when=move || report.with(|r| !r.is_empty())
                        fallback=|| view! {
                            <div class="page__empty">
                                {icon("bar-chart")}
                                <h3>"No data"</h3>
                                <p>"No orders in the selected date range."</p>
                            </div>
                        }
                    >
                        <div class="chart-grid">
                            <div class="chart-card">
                                <h3>"Orders by Source"</h3>
                                <SourceBarChart data=by_source />
                            </div>
                            <div class="chart-card">
                                <h3>"Revenue Trend"</h3>
                                <RevenueLineChart data=revenue />
                            </div>
                        </div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
