use chrono::{DateTime, Utc};
use futures::join;
use log::{debug, info, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::config::PipelineConfig;
use crate::error::BookingError;
use crate::models::booking::{
    BookingItem, BookingItemInput, BookingPreviewRequest, PreviewOutcome,
};
use crate::models::condition::ConditionContext;
use crate::models::discount::{Discount, DiscountScope};
use crate::models::money;
use crate::models::product::Product;
use crate::services::discount_service::DiscountService;
use crate::services::interface::{
    BookingLookup, ExchangeRateSource, HostLookup, ProductLookup,
};
use crate::services::preview_builder::{FinalizeParams, PreviewBuilder};
use crate::services::validation_service::ValidationService;

/// Orchestrates the whole pipeline: concurrent record fetches, the
/// validation gate, per-item and total-scoped discount application, and the
/// staged preview build.
pub struct BookingPreviewService<H, P, B, X> {
    hosts: H,
    products: P,
    bookings: B,
    rates: X,
    config: PipelineConfig,
}

impl<H, P, B, X> BookingPreviewService<H, P, B, X>
where
    H: HostLookup,
    P: ProductLookup,
    B: BookingLookup,
    X: ExchangeRateSource,
{
    pub fn new(hosts: H, products: P, bookings: B, rates: X, config: PipelineConfig) -> Self {
        Self {
            hosts,
            products,
            bookings,
            rates,
            config,
        }
    }

    pub async fn create_preview(
        &self,
        request: &BookingPreviewRequest,
    ) -> Result<PreviewOutcome, BookingError> {
        self.create_preview_at(request, Utc::now()).await
    }

    /// Pricing is time-dependent (discount windows, installment due dates),
    /// so the reference instant is a parameter; tests pin it.
    pub async fn create_preview_at(
        &self,
        request: &BookingPreviewRequest,
        now: DateTime<Utc>,
    ) -> Result<PreviewOutcome, BookingError> {
        // Host and product records are independent reads.
        let (host, product) = join!(
            self.hosts.find_host(request.host_id),
            self.products.find_product(request.product_id)
        );
        let host = host?;
        let product = product?;

        // One lookup per request; the coupon is routed to exactly one scope
        // bucket further down, based on its own scope.
        let resolved_discount = request
            .coupon
            .as_deref()
            .and_then(|code| DiscountService::resolve_coupon(&product, code, now));

        let bookings = self
            .bookings
            .get_product_bookings(request.host_id, request.product_id)
            .await?;

        ValidationService::validate(
            &product,
            request.plan_id,
            request.date_id,
            request.currency.as_deref(),
            request.coupon.as_deref(),
            resolved_discount.as_ref(),
            &bookings,
        )?;

        let apply_installments = request.apply_installments.unwrap_or(false);

        let mut base_amounts = Vec::with_capacity(request.items.len());
        for item in &request.items {
            base_amounts.push(Self::item_base_amount(item)?);
        }
        let subtotal = money::round(base_amounts.iter().copied().sum());

        let context = Self::build_context(request, subtotal, apply_installments);
        let (item_bucket, total_bucket) =
            Self::scope_buckets(&product, resolved_discount.as_ref());

        let mut items = Vec::with_capacity(request.items.len());
        let mut items_total = Decimal::ZERO;
        for (input, base_amount) in request.items.iter().zip(base_amounts) {
            let applied = DiscountService::apply(base_amount, &context, now, &item_bucket)?;
            let final_amount = applied.final_amount.max(Decimal::ZERO);
            items_total += final_amount;
            items.push(BookingItem {
                fare_type: input.fare_type.clone(),
                quantity: input.quantity,
                amount: base_amount,
                final_amount,
                discounts: applied.discounts,
            });
        }

        let total_result =
            DiscountService::apply(items_total, &context, now, &total_bucket)?;
        let discounted_total = total_result.final_amount.max(Decimal::ZERO);
        let discounted_amount = money::round(subtotal - discounted_total);

        let mut applied_discounts: Vec<Discount> = Vec::new();
        for discount in items.iter().flat_map(|item| item.discounts.iter()) {
            if !applied_discounts.contains(discount) {
                applied_discounts.push(discount.clone());
            }
        }
        applied_discounts.extend(total_result.discounts);

        let conversion_rates = match self.rates.get_rate(&self.config.exchange_rate_source).await
        {
            Ok(rate) => Some(rate),
            Err(err) => {
                // Rates are supplementary; a failed fetch never aborts the
                // preview.
                warn!("conversion rate lookup failed, omitting rates: {err}");
                None
            }
        };

        let preview = PreviewBuilder::new()
            .with_basic_pricing(subtotal, discounted_amount)
            .with_items_and_discounts(items, applied_discounts)
            .with_conversion_rates(conversion_rates)
            .finalize(FinalizeParams {
                billing_plan: &host.billing_plan,
                installments_program: product.installments.as_ref(),
                apply_installments,
                context: &context,
                now,
            })?;

        info!(
            "booking preview computed for product {}: subtotal {}, total {}, installments {}",
            product.id,
            preview.subtotal,
            preview.total,
            preview.installments.len()
        );

        Ok(PreviewOutcome {
            preview,
            discount: resolved_discount,
        })
    }

    fn item_base_amount(item: &BookingItemInput) -> Result<Decimal, BookingError> {
        if let Some(total_amount) = item.total_amount {
            return Ok(money::round(total_amount));
        }
        if let Some(price) = item.price {
            return Ok(money::round(price * Decimal::from(item.quantity)));
        }
        Err(BookingError::InvalidBookingItem)
    }

    /// Item-scoped and total-scoped discount buckets, with the resolved
    /// coupon merged into whichever bucket its own scope names.
    fn scope_buckets(
        product: &Product,
        resolved_discount: Option<&Discount>,
    ) -> (Vec<Discount>, Vec<Discount>) {
        let mut item_bucket: Vec<Discount> = Vec::new();
        let mut total_bucket: Vec<Discount> = Vec::new();

        for discount in &product.discounts {
            match discount.scope {
                DiscountScope::Item => item_bucket.push(discount.clone()),
                DiscountScope::Total => total_bucket.push(discount.clone()),
            }
        }
        if let Some(discount) = resolved_discount {
            debug!("coupon routed to {:?} bucket", discount.scope);
            match discount.scope {
                DiscountScope::Item => item_bucket.push(discount.clone()),
                DiscountScope::Total => total_bucket.push(discount.clone()),
            }
        }

        (item_bucket, total_bucket)
    }

    fn build_context(
        request: &BookingPreviewRequest,
        subtotal: Decimal,
        apply_installments: bool,
    ) -> ConditionContext {
        let mut context = ConditionContext::new();
        context.insert(
            "subtotal".to_string(),
            Value::from(subtotal.to_f64().unwrap_or_default()),
        );
        context.insert(
            "itemsCount".to_string(),
            Value::from(request.items.len() as u64),
        );
        context.insert(
            "applyInstallments".to_string(),
            Value::from(apply_installments),
        );
        if let Some(currency) = &request.currency {
            context.insert("currency".to_string(), Value::from(currency.clone()));
        }
        if let Some(session) = request.session {
            context.insert("session".to_string(), Value::from(session));
        }
        context
    }
}
