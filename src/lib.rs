//! Booking pricing and checkout computation pipeline for the hostly
//! marketplace: discount application, platform commission, installment
//! schedules, and the validation gate in front of them. The HTTP surface
//! and persistence live elsewhere and talk to this crate through the
//! collaborator traits in [`services::interface`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::PipelineConfig;
pub use error::BookingError;
pub use models::booking::{BookingPreview, BookingPreviewRequest, PreviewOutcome};
pub use services::booking_preview_service::BookingPreviewService;
