use thiserror::Error;

/// Every failure the pricing pipeline can surface. Validation failures are
/// client-correctable; `UnsupportedFrequency`, `UnsupportedOperator`,
/// `IncompletePreview` and `Internal` are configuration or programming
/// defects and should be logged as such.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("product not found")]
    ProductNotFound,
    #[error("product is not published")]
    ProductIsNotPublished,
    #[error("plan not found on product")]
    PlanNotFound,
    #[error("date not found on product")]
    DateNotFound,
    #[error("currency is not supported by this product")]
    InvalidCurrency,
    #[error("discount code not found")]
    DiscountCodeNotFound,
    #[error("product has reached its maximum number of bookings")]
    ProductMaxBookingsReached,
    #[error("plan has reached its maximum number of bookings")]
    PlanMaxBookingsReached,
    #[error("date has reached its maximum number of bookings")]
    DateMaxBookingsReached,
    #[error("discount code has reached its maximum number of bookings")]
    DiscountCodeMaxBookingsReached,
    #[error("host not found")]
    HostNotFound,
    #[error("booking item needs a price or a total amount")]
    InvalidBookingItem,
    #[error("installments program has an unsupported frequency")]
    UnsupportedFrequency,
    #[error("condition has an unsupported operator")]
    UnsupportedOperator,
    #[error("booking preview is missing its {0} stage")]
    IncompletePreview(&'static str),
    #[error("{0}")]
    Internal(String),
}

impl BookingError {
    /// Whether the caller can correct this by changing the request, as
    /// opposed to a defect in stored configuration or in the pipeline
    /// itself.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            BookingError::UnsupportedFrequency
                | BookingError::UnsupportedOperator
                | BookingError::IncompletePreview(_)
                | BookingError::Internal(_)
        )
    }
}
