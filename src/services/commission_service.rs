use rust_decimal::Decimal;

use crate::models::billing::{AppFee, BillingPlan};
use crate::models::money;

pub struct CommissionService;

impl CommissionService {
    /// Sum the billing plan's breakdown against `total`. Free and zero-total
    /// bookings carry no commission regardless of breakdown contents.
    ///
    /// The payer decides what the caller does with the amount: `Customer`
    /// means it is added on top of the total, `Host` means it is
    /// informational here and netted out of host proceeds elsewhere.
    pub fn calculate(billing_plan: &BillingPlan, total: Decimal) -> AppFee {
        if money::round(total) <= Decimal::ZERO {
            return AppFee {
                amount: Decimal::ZERO,
                commission_payer: billing_plan.commission_payer,
            };
        }

        let amount = billing_plan
            .breakdown
            .iter()
            .map(|entry| entry.kind.adjustment_against(entry.amount, total))
            .sum::<Decimal>();

        AppFee {
            amount: money::round(amount),
            commission_payer: billing_plan.commission_payer,
        }
    }
}
