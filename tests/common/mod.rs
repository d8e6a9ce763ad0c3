use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use hostly_api::models::billing::{BillingPlan, Breakdown, CommissionPayer};
use hostly_api::models::booking::{
    BookingItemInput, BookingPreviewRequest, BookingSummary, ConversionRate,
};
use hostly_api::models::host::Host;
use hostly_api::models::money::AdjustmentKind;
use hostly_api::models::product::{
    BookingSettings, Plan, Product, ProductDate, ProductStatus, ProductType, RecordStatus,
};
use hostly_api::services::interface::{
    BookingLookup, ExchangeRateSource, HostLookup, ProductLookup,
};
use hostly_api::{BookingError, BookingPreviewService, PipelineConfig};

pub const HOST_ID: Uuid = Uuid::from_u128(1);
pub const PRODUCT_ID: Uuid = Uuid::from_u128(2);
pub const PLAN_ID: Uuid = Uuid::from_u128(3);
pub const DATE_ID: Uuid = Uuid::from_u128(4);

pub struct InMemoryHosts {
    pub host: Host,
}

impl HostLookup for InMemoryHosts {
    async fn find_host(&self, host_id: Uuid) -> Result<Host, BookingError> {
        if self.host.id == host_id {
            Ok(self.host.clone())
        } else {
            Err(BookingError::HostNotFound)
        }
    }
}

pub struct InMemoryProducts {
    pub product: Product,
}

impl ProductLookup for InMemoryProducts {
    async fn find_product(&self, product_id: Uuid) -> Result<Product, BookingError> {
        if self.product.id == product_id {
            Ok(self.product.clone())
        } else {
            Err(BookingError::ProductNotFound)
        }
    }
}

pub struct InMemoryBookings {
    pub bookings: Vec<BookingSummary>,
}

impl BookingLookup for InMemoryBookings {
    async fn get_product_bookings(
        &self,
        _host_id: Uuid,
        _product_id: Uuid,
    ) -> Result<Vec<BookingSummary>, BookingError> {
        Ok(self.bookings.clone())
    }
}

pub struct FixedRates {
    pub rate: Option<ConversionRate>,
}

impl ExchangeRateSource for FixedRates {
    async fn get_rate(&self, _source_name: &str) -> Result<ConversionRate, BookingError> {
        self.rate
            .clone()
            .ok_or_else(|| BookingError::Internal("rate source unavailable".to_string()))
    }
}

pub type TestService =
    BookingPreviewService<InMemoryHosts, InMemoryProducts, InMemoryBookings, FixedRates>;

pub fn billing_plan(payer: CommissionPayer, percentage: Decimal) -> BillingPlan {
    BillingPlan {
        name: "standard".to_string(),
        breakdown: vec![Breakdown {
            key: "platform".to_string(),
            kind: AdjustmentKind::Percentage,
            amount: percentage,
        }],
        commission_payer: payer,
    }
}

pub fn host(billing_plan: BillingPlan) -> Host {
    Host {
        id: HOST_ID,
        billing_plan,
    }
}

pub fn product() -> Product {
    Product {
        id: PRODUCT_ID,
        host_id: HOST_ID,
        name: "Sourdough masterclass".to_string(),
        product_type: ProductType::Session,
        product_status: ProductStatus::Published,
        record_status: RecordStatus::Active,
        plans: vec![Plan {
            id: PLAN_ID,
            name: "General admission".to_string(),
            price: Some(dec!(100)),
            max_capacity: None,
        }],
        dates: vec![ProductDate {
            id: DATE_ID,
            starts_at: Utc::now(),
            max_capacity: None,
        }],
        discounts: Vec::new(),
        discount_codes: Vec::new(),
        booking_settings: BookingSettings {
            currencies: vec!["USD".to_string()],
        },
        max_capacity: None,
        installments: None,
        is_free: false,
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn service(host: Host, product: Product, bookings: Vec<BookingSummary>) -> TestService {
    init_logging();
    BookingPreviewService::new(
        InMemoryHosts { host },
        InMemoryProducts { product },
        InMemoryBookings { bookings },
        FixedRates { rate: None },
        PipelineConfig::default(),
    )
}

pub fn service_with_rate(
    host: Host,
    product: Product,
    rate: Option<ConversionRate>,
) -> TestService {
    init_logging();
    BookingPreviewService::new(
        InMemoryHosts { host },
        InMemoryProducts { product },
        InMemoryBookings {
            bookings: Vec::new(),
        },
        FixedRates { rate },
        PipelineConfig::default(),
    )
}

pub fn request(items: Vec<BookingItemInput>) -> BookingPreviewRequest {
    BookingPreviewRequest {
        host_id: HOST_ID,
        product_id: PRODUCT_ID,
        plan_id: PLAN_ID,
        date_id: None,
        currency: Some("USD".to_string()),
        items,
        coupon: None,
        apply_installments: None,
        session: None,
    }
}

pub fn priced_item(price: Decimal, quantity: u32) -> BookingItemInput {
    BookingItemInput {
        quantity,
        fare_type: "adult".to_string(),
        price: Some(price),
        total_amount: None,
    }
}
