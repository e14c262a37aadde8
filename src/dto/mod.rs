pub mod customers;
pub mod purchase;
pub mod vegetables;
