use uuid::Uuid;

use crate::error::BookingError;
use crate::models::booking::BookingSummary;
use crate::models::discount::Discount;
use crate::models::product::{Product, ProductStatus, RecordStatus};

pub struct ValidationService;

impl ValidationService {
    /// Eligibility gate that runs before any price is computed. Category
    /// checks (status, availability, plan, currency, coupon) short-circuit
    /// in order; the capacity ceilings are then evaluated together.
    pub fn validate(
        product: &Product,
        plan_id: Uuid,
        date_id: Option<Uuid>,
        currency: Option<&str>,
        coupon_code: Option<&str>,
        resolved_discount: Option<&Discount>,
        bookings: &[BookingSummary],
    ) -> Result<(), BookingError> {
        if product.record_status == RecordStatus::Deleted {
            return Err(BookingError::ProductNotFound);
        }
        if product.product_status != ProductStatus::Published {
            return Err(BookingError::ProductIsNotPublished);
        }

        product.product_type.validate_availability(product, date_id)?;

        if product.find_plan(plan_id).is_none() {
            return Err(BookingError::PlanNotFound);
        }

        if !product.is_free {
            if let Some(currency) = currency {
                if !product.supports_currency(currency) {
                    return Err(BookingError::InvalidCurrency);
                }
            }
        }

        if coupon_code.is_some() && resolved_discount.is_none() {
            return Err(BookingError::DiscountCodeNotFound);
        }

        Self::validate_capacity(product, plan_id, date_id, resolved_discount, bookings)
    }

    /// All four ceilings are evaluated independently; the first configured
    /// breach (product, plan, date, discount order) is the one reported.
    fn validate_capacity(
        product: &Product,
        plan_id: Uuid,
        date_id: Option<Uuid>,
        resolved_discount: Option<&Discount>,
        bookings: &[BookingSummary],
    ) -> Result<(), BookingError> {
        let product_full = Self::ceiling_reached(product.max_capacity, bookings.len());

        let plan_full = product.find_plan(plan_id).map_or(false, |plan| {
            let count = bookings.iter().filter(|b| b.plan_id == plan.id).count();
            Self::ceiling_reached(plan.max_capacity, count)
        });

        let date_full = date_id
            .and_then(|id| product.find_date(id))
            .map_or(false, |date| {
                let count = bookings
                    .iter()
                    .filter(|b| b.date_id == Some(date.id))
                    .count();
                Self::ceiling_reached(date.max_capacity, count)
            });

        let discount_full = resolved_discount.map_or(false, |discount| {
            let count = bookings
                .iter()
                .filter(|b| Self::recorded_discount(b, discount))
                .count();
            Self::ceiling_reached(discount.max_capacity, count)
        });

        if product_full {
            return Err(BookingError::ProductMaxBookingsReached);
        }
        if plan_full {
            return Err(BookingError::PlanMaxBookingsReached);
        }
        if date_full {
            return Err(BookingError::DateMaxBookingsReached);
        }
        if discount_full {
            return Err(BookingError::DiscountCodeMaxBookingsReached);
        }
        Ok(())
    }

    /// A missing or zero ceiling means unlimited.
    fn ceiling_reached(max_capacity: Option<u32>, count: usize) -> bool {
        match max_capacity {
            Some(max) if max > 0 => count >= max as usize,
            _ => false,
        }
    }

    /// Whether a booking's frozen preview recorded this discount, matched by
    /// id when one exists, falling back to the coupon code.
    fn recorded_discount(booking: &BookingSummary, discount: &Discount) -> bool {
        if let Some(id) = discount.id {
            if booking.discount_ids.contains(&id) {
                return true;
            }
        }
        discount.code.as_deref().map_or(false, |code| {
            booking
                .discount_codes
                .iter()
                .any(|recorded| recorded.eq_ignore_ascii_case(code))
        })
    }
}
