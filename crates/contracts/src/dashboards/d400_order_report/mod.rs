pub mod dto;

pub use dto::{OrderReport, ReportFilters, RevenuePoint, SourceCount, UNKNOWN_SOURCE};
