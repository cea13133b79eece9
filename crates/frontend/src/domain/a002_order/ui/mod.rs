pub mod card;
pub mod details;
pub mod list;

pub use card::OrderCard;
pub use details::OrderDetails;
pub use list::OrdersList;
