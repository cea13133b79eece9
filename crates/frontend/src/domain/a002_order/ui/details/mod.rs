//! Order form (create and edit)
//!
//! - view_model.rs: form state, loading and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::{prepare_submission, OrderDetailsViewModel};
