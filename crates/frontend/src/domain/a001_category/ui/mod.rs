pub mod details;
pub mod list;

pub use details::CategoryDetails;
pub use list::CategoriesList;
