//! Category form (create and edit)
//!
//! - view_model.rs: form state, loading and the save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
