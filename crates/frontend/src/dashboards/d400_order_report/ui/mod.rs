pub mod charts;
pub mod dashboard;

pub use dashboard::OrderReportDashboard;
