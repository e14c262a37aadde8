pub mod customer;
pub mod order;
pub mod vegetable;

pub use customer::Customer;
pub use order::{Order, OrderItems};
pub use vegetable::Vegetable;
