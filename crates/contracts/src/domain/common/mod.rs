//! Response shapes shared by all list and mutation endpoints

pub mod list_outcome;

pub use list_outcome::ListOutcome;
