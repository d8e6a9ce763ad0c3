use chrono::{DateTime, Duration, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::money::AdjustmentKind;
use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Weekly,
    EveryTwoWeeks,
    Monthly,
    /// Unknown cadences in stored configuration deserialize here and fail as
    /// `UnsupportedFrequency` when a schedule is generated.
    #[serde(other)]
    Unsupported,
}

impl Frequency {
    /// Due date of the installment at `order`, offset from `now`. The first
    /// installment (order 0) is due immediately.
    pub fn due_date(&self, now: DateTime<Utc>, order: u32) -> Result<DateTime<Utc>, BookingError> {
        match self {
            Frequency::Weekly => Ok(now + Duration::weeks(order as i64)),
            Frequency::EveryTwoWeeks => Ok(now + Duration::weeks(2 * order as i64)),
            Frequency::Monthly => Ok(now + Months::new(order)),
            Frequency::Unsupported => Err(BookingError::UnsupportedFrequency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestFee {
    pub kind: AdjustmentKind,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentsProgram {
    pub active: bool,
    pub installments_count: u32,
    pub frequency: Frequency,
    pub interest_fee: Option<InterestFee>,
    pub conditions: Option<Vec<Condition>>,
}

/// A generated schedule entry. Never created independently; the last entry
/// absorbs the rounding remainder so the schedule sums exactly to the
/// financed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub amount: Decimal,
    pub due_date: DateTime<Utc>,
    pub order: u32,
}
