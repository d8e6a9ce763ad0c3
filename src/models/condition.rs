use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Flat attribute map a condition set is evaluated against. The orchestrator
/// populates it from the booking request (`subtotal`, `itemsCount`,
/// `currency`, `applyInstallments`, `session`).
pub type ConditionContext = HashMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Anything else found in stored configuration deserializes here and is
    /// rejected at evaluation time.
    #[serde(other)]
    Unsupported,
}

/// A single gating rule on discounts and installment programs,
/// e.g. "only if subtotal > 100".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: String,
    pub operator: Operator,
    pub value: Value,
}
