pub mod booking_preview_service;
pub mod commission_service;
pub mod condition_service;
pub mod discount_service;
pub mod installment_service;
pub mod interface;
pub mod preview_builder;
pub mod validation_service;
