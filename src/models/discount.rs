use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::condition::Condition;
use super::money::AdjustmentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountScope {
    Item,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountStatus {
    Active,
    Inactive,
}

/// A discount definition at product or platform level. Previews snapshot
/// discounts by value, so later edits never alter an already-computed
/// preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Present on coupon-typed discounts, looked up by code at request time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub scope: DiscountScope,
    pub kind: AdjustmentKind,
    pub amount: Decimal,
    pub status: DiscountStatus,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    /// Cap on total redeeming bookings. Unset or zero means unlimited.
    pub max_capacity: Option<u32>,
    pub conditions: Option<Vec<Condition>>,
}

impl Discount {
    /// Status is active and `now` falls inside the validity window. This is
    /// the single activity rule used by pricing, coupon resolution and
    /// capacity counting alike.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if self.status != DiscountStatus::Active {
            return false;
        }
        if let Some(from) = self.valid_from {
            if now < from {
                return false;
            }
        }
        if let Some(until) = self.valid_until {
            if now > until {
                return false;
            }
        }
        true
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code
            .as_deref()
            .map_or(false, |own| own.eq_ignore_ascii_case(code))
    }
}
