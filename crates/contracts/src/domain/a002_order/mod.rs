pub mod aggregate;
pub mod filters;

pub use aggregate::{
    parse_amount, parse_order_date, resolve_category_name, Order, OrderCategory, OrderDto,
    ValidationMode,
};
pub use filters::{showing_range, total_pages, FilterField, OrderFilters, DEFAULT_PAGE_SIZE};
