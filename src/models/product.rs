use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::discount::Discount;
use super::installments::InstallmentsProgram;
use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Published,
    Draft,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Active,
    Deleted,
}

/// Closed set of product kinds a host can sell. Availability rules differ
/// per kind: events are bound to a scheduled date, sessions and digital
/// products are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Event,
    Session,
    Digital,
}

impl ProductType {
    pub fn validate_availability(
        &self,
        product: &Product,
        date_id: Option<Uuid>,
    ) -> Result<(), BookingError> {
        match self {
            ProductType::Event => {
                let date_id = date_id.ok_or(BookingError::DateNotFound)?;
                if product.find_date(date_id).is_none() {
                    return Err(BookingError::DateNotFound);
                }
                Ok(())
            }
            ProductType::Session | ProductType::Digital => {
                // No date required, but a supplied one must still resolve.
                if let Some(date_id) = date_id {
                    if product.find_date(date_id).is_none() {
                        return Err(BookingError::DateNotFound);
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub price: Option<Decimal>,
    /// Unset or zero means unlimited.
    pub max_capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDate {
    pub id: Uuid,
    pub starts_at: DateTime<Utc>,
    /// Unset or zero means unlimited.
    pub max_capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSettings {
    /// Currencies the product can be paid in.
    pub currencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub host_id: Uuid,
    pub name: String,
    pub product_type: ProductType,
    pub product_status: ProductStatus,
    pub record_status: RecordStatus,
    pub plans: Vec<Plan>,
    pub dates: Vec<ProductDate>,
    /// Automatic discounts, applied without a code.
    pub discounts: Vec<Discount>,
    /// Coupon-typed discounts, resolved by code at request time.
    pub discount_codes: Vec<Discount>,
    pub booking_settings: BookingSettings,
    /// Product-level booking ceiling. Unset or zero means unlimited.
    pub max_capacity: Option<u32>,
    pub installments: Option<InstallmentsProgram>,
    pub is_free: bool,
}

impl Product {
    pub fn find_plan(&self, plan_id: Uuid) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn find_date(&self, date_id: Uuid) -> Option<&ProductDate> {
        self.dates.iter().find(|date| date.id == date_id)
    }

    pub fn supports_currency(&self, currency: &str) -> bool {
        self.booking_settings
            .currencies
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(currency))
    }
}
