use serde_json::Value;

use crate::error::BookingError;
use crate::models::condition::{Condition, ConditionContext, Operator};

pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// All conditions must hold (logical AND). An empty list gates nothing.
    pub fn evaluate(
        conditions: &[Condition],
        context: &ConditionContext,
    ) -> Result<bool, BookingError> {
        for condition in conditions {
            if !Self::evaluate_one(condition, context)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn evaluate_one(
        condition: &Condition,
        context: &ConditionContext,
    ) -> Result<bool, BookingError> {
        let actual = context.get(&condition.attribute);
        let expected = &condition.value;

        match condition.operator {
            Operator::Unsupported => Err(BookingError::UnsupportedOperator),
            Operator::Eq => Ok(actual.map_or(false, |value| Self::values_equal(value, expected))),
            Operator::Neq => Ok(actual.map_or(true, |value| !Self::values_equal(value, expected))),
            Operator::Gt => Ok(Self::compare_numeric(actual, expected, |lhs, rhs| lhs > rhs)),
            Operator::Gte => Ok(Self::compare_numeric(actual, expected, |lhs, rhs| {
                lhs >= rhs
            })),
            Operator::Lt => Ok(Self::compare_numeric(actual, expected, |lhs, rhs| lhs < rhs)),
            Operator::Lte => Ok(Self::compare_numeric(actual, expected, |lhs, rhs| {
                lhs <= rhs
            })),
        }
    }

    /// Numbers compare numerically regardless of representation; everything
    /// else falls back to structural equality.
    fn values_equal(actual: &Value, expected: &Value) -> bool {
        match (actual.as_f64(), expected.as_f64()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => actual == expected,
        }
    }

    /// Ordered comparisons only apply to numbers; a missing attribute or a
    /// non-numeric operand never satisfies the condition.
    fn compare_numeric(
        actual: Option<&Value>,
        expected: &Value,
        compare: impl Fn(f64, f64) -> bool,
    ) -> bool {
        match (actual.and_then(Value::as_f64), expected.as_f64()) {
            (Some(lhs), Some(rhs)) => compare(lhs, rhs),
            _ => false,
        }
    }
}
