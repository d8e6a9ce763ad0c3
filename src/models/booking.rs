use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::billing::AppFee;
use super::discount::Discount;
use super::installments::Installment;

/// A requested line item, priced either by unit price or by a precomputed
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingItemInput {
    pub quantity: u32,
    pub fare_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
}

/// Inbound booking-preview request (logical fields, not wire format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPreviewRequest {
    pub host_id: Uuid,
    pub product_id: Uuid,
    pub plan_id: Uuid,
    #[serde(default)]
    pub date_id: Option<Uuid>,
    #[serde(default)]
    pub currency: Option<String>,
    pub items: Vec<BookingItemInput>,
    #[serde(default)]
    pub coupon: Option<String>,
    #[serde(default)]
    pub apply_installments: Option<bool>,
    #[serde(default)]
    pub session: Option<bool>,
}

/// A priced line item with the discounts that actually reduced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingItem {
    pub fare_type: String,
    pub quantity: u32,
    /// Pre-discount amount.
    pub amount: Decimal,
    pub final_amount: Decimal,
    pub discounts: Vec<Discount>,
}

/// Just enough of an existing booking to count it against capacity
/// ceilings: its plan, its date, and the discounts its frozen preview
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub plan_id: Uuid,
    pub date_id: Option<Uuid>,
    pub discount_ids: Vec<Uuid>,
    pub discount_codes: Vec<String>,
}

/// Exchange-rate snapshot attached to a preview for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRate {
    pub currency: String,
    pub average: Decimal,
    pub date: DateTime<Utc>,
}

/// The computed output of the pipeline. Constructed fresh per request,
/// immutable once built; booking creation consumes it verbatim to freeze the
/// economic terms of the booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPreview {
    pub subtotal: Decimal,
    /// Total value removed by item-scoped and total-scoped discounts.
    pub discounted_amount: Decimal,
    pub items: Vec<BookingItem>,
    /// Every discount that contributed, snapshotted by value.
    pub discounts: Vec<Discount>,
    pub app_fee: AppFee,
    /// Recorded when the customer bears the commission, before it is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_amount_before_app_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_rates: Option<ConversionRate>,
    pub installments: Vec<Installment>,
    pub installments_interest_fee: Decimal,
    pub installments_program_applied: bool,
    /// Amount still owed after the first payment. Zero when not financed.
    pub remaining_amount: Decimal,
    pub total: Decimal,
    /// First installment amount when financed, otherwise `total`.
    pub amount_to_pay: Decimal,
}

/// What the pipeline hands back to the caller: the preview plus the discount
/// (if any) that matched the supplied coupon code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewOutcome {
    pub preview: BookingPreview,
    pub discount: Option<Discount>,
}
