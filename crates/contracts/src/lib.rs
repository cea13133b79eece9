//! Wire contracts shared between the dashboard frontend and the orders API.
//!
//! Everything in this crate is target independent: DTOs, filter state and the
//! pure domain rules the UI relies on (category name resolution, validation,
//! report aggregation).

pub mod dashboards;
pub mod domain;
pub mod system;
