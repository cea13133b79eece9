pub mod aggregate;

pub use aggregate::{filter_categories, Category, CategoryDto, UNKNOWN_CATEGORY};
