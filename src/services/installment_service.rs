use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::BookingError;
use crate::models::condition::ConditionContext;
use crate::models::installments::{Installment, InstallmentsProgram};
use crate::models::money;
use crate::services::condition_service::ConditionEvaluator;

/// Outcome of a schedule computation. `final_amount_with_interest` is always
/// meaningful, even when no schedule was generated.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentsResult {
    pub installments: Vec<Installment>,
    pub installments_interest_fee: Decimal,
    pub installments_program_applied: bool,
    pub remaining_amount: Decimal,
    pub final_amount_with_interest: Decimal,
}

impl InstallmentsResult {
    fn not_applied(final_amount: Decimal) -> Self {
        Self {
            installments: Vec::new(),
            installments_interest_fee: Decimal::ZERO,
            installments_program_applied: false,
            remaining_amount: Decimal::ZERO,
            final_amount_with_interest: money::round(final_amount),
        }
    }
}

pub struct InstallmentService;

impl InstallmentService {
    /// Compute interest and generate a due-dated schedule on top of
    /// `final_amount`.
    ///
    /// Interest is rate-based on `subtotal`, the pre-discount/pre-fee
    /// principal, not on the financed total. When the program's conditions
    /// fail, the schedule is withheld but the interest fee and the total
    /// with interest are still reported for the caller's information.
    pub fn calculate(
        subtotal: Decimal,
        final_amount: Decimal,
        program: Option<&InstallmentsProgram>,
        apply_installments: bool,
        context: &ConditionContext,
        now: DateTime<Utc>,
    ) -> Result<InstallmentsResult, BookingError> {
        let Some(program) = program else {
            return Ok(InstallmentsResult::not_applied(final_amount));
        };
        if !program.active
            || !apply_installments
            || program.installments_count == 0
            || final_amount <= Decimal::ZERO
        {
            return Ok(InstallmentsResult::not_applied(final_amount));
        }

        let interest_fee = program
            .interest_fee
            .as_ref()
            .map(|fee| money::round(fee.kind.adjustment_against(fee.amount, subtotal)))
            .unwrap_or(Decimal::ZERO);
        let final_amount_with_interest = money::round(final_amount + interest_fee);

        let conditions = program.conditions.as_deref().unwrap_or(&[]);
        if !ConditionEvaluator::evaluate(conditions, context)? {
            return Ok(InstallmentsResult {
                installments: Vec::new(),
                installments_interest_fee: interest_fee,
                installments_program_applied: false,
                remaining_amount: Decimal::ZERO,
                final_amount_with_interest,
            });
        }

        let count = program.installments_count;
        let per_installment = money::round(final_amount_with_interest / Decimal::from(count));

        let mut installments = Vec::with_capacity(count as usize);
        for order in 0..count {
            let amount = if order == count - 1 {
                // The last installment absorbs the rounding remainder so the
                // schedule sums exactly to the financed total.
                final_amount_with_interest - per_installment * Decimal::from(count - 1)
            } else {
                per_installment
            };
            installments.push(Installment {
                amount,
                due_date: program.frequency.due_date(now, order)?,
                order,
            });
        }

        let remaining_amount = money::round(final_amount_with_interest - installments[0].amount);

        Ok(InstallmentsResult {
            installments,
            installments_interest_fee: interest_fee,
            installments_program_applied: true,
            remaining_amount,
            final_amount_with_interest,
        })
    }
}
