//! Validated request shapes.
//!
//! Bodies arrive as loose JSON. Each `from_body` constructor applies the
//! endpoint's checks in a fixed order and reports the first one that fails.
//! Presence checks follow JavaScript truthiness: `null`, `false`, `0` and
//! `""` count as missing.

use serde_json::{Number, Value};

use crate::devices::error::ValidationError;

/// `PUT /devices/cash-register/work-shift`
#[derive(Debug, Clone, PartialEq)]
pub struct WorkShiftRequest {
    pub open: bool,
}

impl WorkShiftRequest {
    /// Only an absent `isActive` key is rejected; any present value,
    /// `false` or `null` included, is accepted and read by truthiness.
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let flag = body
            .get("isActive")
            .ok_or(ValidationError::ShiftFlagMissing)?;
        Ok(Self {
            open: is_truthy(flag),
        })
    }
}

/// `POST /devices/cash-register/receipts`
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRequest {
    pub sum: Number,
    pub operation: Value,
}

impl ReceiptRequest {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        // Line items are only checked for presence; the stub prints none of them.
        if !matches!(body.get("items"), Some(Value::Array(items)) if !items.is_empty()) {
            return Err(ValidationError::ReceiptItemsMissing);
        }

        let sum = body
            .get("payment")
            .and_then(|payment| positive_amount(payment.get("sum")))
            .ok_or(ValidationError::InvalidReceiptSum)?;

        let operation = body
            .get("type")
            .filter(|value| is_truthy(value))
            .cloned()
            .ok_or(ValidationError::OperationTypeMissing)?;

        Ok(Self { sum, operation })
    }
}

/// `POST /devices/cash-register/non-fiscals`: the body itself is the line list.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFiscalRequest {
    pub lines: Vec<Value>,
}

impl NonFiscalRequest {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        match body {
            Value::Array(lines) if !lines.is_empty() => Ok(Self {
                lines: lines.clone(),
            }),
            _ => Err(ValidationError::PrintItemsMissing),
        }
    }
}

/// `POST /devices/pos/payments`
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: Number,
}

impl PaymentRequest {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let amount = positive_amount(body.get("amount"))
            .ok_or(ValidationError::InvalidPaymentAmount)?;
        Ok(Self { amount })
    }
}

/// `POST /devices/pos/refunds`
#[derive(Debug, Clone, PartialEq)]
pub struct RefundRequest {
    pub amount: Number,
    pub transaction_number: Value,
}

impl RefundRequest {
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let amount = positive_amount(body.get("amount"))
            .ok_or(ValidationError::InvalidRefundAmount)?;

        let transaction_number = body
            .get("transactionNumber")
            .filter(|value| is_truthy(value))
            .cloned()
            .ok_or(ValidationError::TransactionNumberMissing)?;

        Ok(Self {
            amount,
            transaction_number,
        })
    }
}

/// JavaScript truthiness over a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A JSON number strictly above zero. Fractional amounts keep the digits the
/// client sent; whole ones sent as `250.0` come back as `250`.
fn positive_amount(value: Option<&Value>) -> Option<Number> {
    match value {
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n > 0.0) => {
            Some(whole_as_integer(number))
        }
        _ => None,
    }
}

fn whole_as_integer(number: &Number) -> Number {
    match number.as_f64() {
        Some(n) if number.is_f64() && n.fract() == 0.0 && n < 9_007_199_254_740_992.0 => {
            Number::from(n as u64)
        }
        _ => number.clone(),
    }
}

/// Render a value the way it reads on a printed slip: strings without quotes.
pub fn slip_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
