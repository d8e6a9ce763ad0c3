use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::BookingError;
use crate::models::condition::ConditionContext;
use crate::models::discount::Discount;
use crate::models::money;
use crate::models::product::Product;
use crate::services::condition_service::ConditionEvaluator;

/// Outcome of one engine pass: the discounts that contributed a non-zero
/// adjustment (snapshotted by value) and the reduced amount.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDiscounts {
    pub discounts: Vec<Discount>,
    pub final_amount: Decimal,
}

pub struct DiscountService;

impl DiscountService {
    /// Apply an ordered set of discounts against `base_amount`. Inactive
    /// discounts and discounts whose conditions do not hold are skipped
    /// here, not upstream, so pricing, coupon resolution and capacity
    /// counting all share one activity rule.
    ///
    /// The returned amount is rounded but not clamped; callers cap it at
    /// zero before it feeds a payable total.
    pub fn apply(
        base_amount: Decimal,
        context: &ConditionContext,
        now: DateTime<Utc>,
        discounts: &[Discount],
    ) -> Result<AppliedDiscounts, BookingError> {
        let mut applied = Vec::new();
        let mut total_adjustment = Decimal::ZERO;

        for discount in discounts {
            if !discount.is_active(now) {
                continue;
            }
            if let Some(conditions) = &discount.conditions {
                if !ConditionEvaluator::evaluate(conditions, context)? {
                    continue;
                }
            }

            let adjustment =
                money::round(discount.kind.adjustment_against(discount.amount, base_amount));
            if adjustment.is_zero() {
                continue;
            }

            total_adjustment += adjustment;
            applied.push(discount.clone());
        }

        Ok(AppliedDiscounts {
            discounts: applied,
            final_amount: money::round(base_amount - total_adjustment),
        })
    }

    /// Look a coupon up by code among the product's coupon-typed discounts.
    /// Expired or inactive codes resolve to nothing, which the validation
    /// gate reports as `DiscountCodeNotFound`.
    pub fn resolve_coupon(product: &Product, code: &str, now: DateTime<Utc>) -> Option<Discount> {
        product
            .discount_codes
            .iter()
            .find(|discount| discount.matches_code(code) && discount.is_active(now))
            .cloned()
    }
}
