use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::BookingError;
use crate::models::billing::{BillingPlan, CommissionPayer};
use crate::models::booking::{BookingItem, BookingPreview, ConversionRate};
use crate::models::condition::ConditionContext;
use crate::models::discount::Discount;
use crate::models::installments::InstallmentsProgram;
use crate::models::money;
use crate::services::commission_service::CommissionService;
use crate::services::installment_service::InstallmentService;

/// Everything `finalize` needs beyond the staged pricing data.
#[derive(Debug, Clone, Copy)]
pub struct FinalizeParams<'a> {
    pub billing_plan: &'a BillingPlan,
    pub installments_program: Option<&'a InstallmentsProgram>,
    pub apply_installments: bool,
    pub context: &'a ConditionContext,
    pub now: DateTime<Utc>,
}

/// Staged accumulator for one booking preview. A builder is constructed
/// fresh per request and consumed by `finalize`, so no state can bleed
/// across requests. Omitted stages make `finalize` fail loudly instead of
/// silently defaulting fields.
#[derive(Debug, Default)]
pub struct PreviewBuilder {
    basic_pricing: Option<(Decimal, Decimal)>,
    items: Option<Vec<BookingItem>>,
    discounts: Vec<Discount>,
    conversion_rates: Option<ConversionRate>,
}

impl PreviewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basic_pricing(mut self, subtotal: Decimal, discounted_amount: Decimal) -> Self {
        self.basic_pricing = Some((money::round(subtotal), money::round(discounted_amount)));
        self
    }

    pub fn with_items_and_discounts(
        mut self,
        items: Vec<BookingItem>,
        discounts: Vec<Discount>,
    ) -> Self {
        self.items = Some(items);
        self.discounts = discounts;
        self
    }

    pub fn with_conversion_rates(mut self, rate: Option<ConversionRate>) -> Self {
        self.conversion_rates = rate;
        self
    }

    /// Assemble the preview: app fee on the discounted total, installments
    /// on top of the post-fee total, then the final rounding pass.
    pub fn finalize(self, params: FinalizeParams<'_>) -> Result<BookingPreview, BookingError> {
        let (subtotal, discounted_amount) = self
            .basic_pricing
            .ok_or(BookingError::IncompletePreview("basic pricing"))?;
        let items = self
            .items
            .ok_or(BookingError::IncompletePreview("items"))?;

        let mut total = (subtotal - discounted_amount).max(Decimal::ZERO);

        let app_fee = CommissionService::calculate(params.billing_plan, total);
        let mut final_amount_before_app_fee = None;
        if app_fee.commission_payer == CommissionPayer::Customer {
            final_amount_before_app_fee = Some(total);
            total += app_fee.amount;
        }

        let schedule = InstallmentService::calculate(
            subtotal,
            total,
            params.installments_program,
            params.apply_installments,
            params.context,
            params.now,
        )?;
        total = money::round(schedule.final_amount_with_interest);

        let amount_to_pay = schedule
            .installments
            .first()
            .map(|installment| installment.amount)
            .unwrap_or(total);

        Ok(BookingPreview {
            subtotal,
            discounted_amount,
            items,
            discounts: self.discounts,
            app_fee,
            final_amount_before_app_fee,
            conversion_rates: self.conversion_rates,
            installments: schedule.installments,
            installments_interest_fee: schedule.installments_interest_fee,
            installments_program_applied: schedule.installments_program_applied,
            remaining_amount: schedule.remaining_amount,
            total,
            amount_to_pay,
        })
    }
}
