use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minor-unit precision every monetary value is quantized to before it is
/// compared, persisted, or displayed.
pub const DECIMAL_PLACES: u32 = 2;

/// Round half away from zero at the minor-unit boundary.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// How an amount adjusts a base value. Shared by discounts, billing plan
/// breakdown entries and installment interest fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    Fixed,
    Percentage,
}

impl AdjustmentKind {
    /// The value this adjustment contributes against `base`.
    pub fn adjustment_against(&self, amount: Decimal, base: Decimal) -> Decimal {
        match self {
            AdjustmentKind::Fixed => amount,
            AdjustmentKind::Percentage => amount / Decimal::ONE_HUNDRED * base,
        }
    }
}
