pub mod contact_service;
pub mod quote_service;
