use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::AdjustmentKind;

/// Which party bears the platform commission. Host-side fees are netted out
/// of the host's proceeds elsewhere; customer-side fees are added on top of
/// the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionPayer {
    Host,
    Customer,
}

/// One entry of a host's commission schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub key: String,
    pub kind: AdjustmentKind,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPlan {
    pub name: String,
    pub breakdown: Vec<Breakdown>,
    pub commission_payer: CommissionPayer,
}

/// Computed platform commission for a single preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppFee {
    pub amount: Decimal,
    pub commission_payer: CommissionPayer,
}
