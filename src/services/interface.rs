//! Read-only collaborators the pricing pipeline consumes. Implementations
//! live with the persistence and transport layers; the pipeline only sees
//! these contracts.

use uuid::Uuid;

use crate::error::BookingError;
use crate::models::booking::{BookingSummary, ConversionRate};
use crate::models::host::Host;
use crate::models::product::Product;

pub trait HostLookup {
    async fn find_host(&self, host_id: Uuid) -> Result<Host, BookingError>;
}

pub trait ProductLookup {
    async fn find_product(&self, product_id: Uuid) -> Result<Product, BookingError>;
}

pub trait BookingLookup {
    /// Existing bookings for a product, used purely for capacity counting.
    async fn get_product_bookings(
        &self,
        host_id: Uuid,
        product_id: Uuid,
    ) -> Result<Vec<BookingSummary>, BookingError>;
}

pub trait ExchangeRateSource {
    async fn get_rate(&self, source_name: &str) -> Result<ConversionRate, BookingError>;
}
