pub mod billing;
pub mod booking;
pub mod condition;
pub mod discount;
pub mod host;
pub mod installments;
pub mod money;
pub mod product;
