pub mod customer_service;
pub mod purchase_service;
pub mod report_service;
pub mod vegetable_service;
