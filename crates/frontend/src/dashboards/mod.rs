pub mod d400_order_report;

pub use d400_order_report::ui::OrderReportDashboard;
