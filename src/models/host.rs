use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::billing::BillingPlan;

/// The selling party. Only the billing plan matters to the pricing pipeline;
/// the rest of the host record lives with the CRUD surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: Uuid,
    pub billing_plan: BillingPlan,
}
