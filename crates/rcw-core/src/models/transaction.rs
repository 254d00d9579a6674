use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::transaction_id;

/// Literal `data_type` tag carried by every record written by this service.
pub const DATA_TYPE_CASH_PAYMENT: &str = "cash payment";

/// A cash transaction as stored in the table and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CashTransaction {
    pub id: String,
    pub user_name: String,
    #[ts(type = "number | string")]
    pub amount_value: AmountValue,
    pub purpose: String,
    pub amount_currency: String,
    pub data_type: String,
    pub create_time: jiff::Timestamp,
}

impl CashTransaction {
    /// Assemble a new record with a fresh id and the current UTC time.
    pub fn create(new: NewCashTransaction) -> Self {
        new.into_record(transaction_id::generate(), jiff::Timestamp::now())
    }
}

/// Caller-supplied amount. Kept as sent: no numeric validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(serde_json::Number),
    Text(String),
}

/// The validated upload payload: `{user_name, amount_value, purpose, currency}`.
///
/// A caller-supplied `create_time` is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCashTransaction {
    pub user_name: String,
    pub amount_value: AmountValue,
    pub purpose: String,
    pub currency: String,
}

impl NewCashTransaction {
    /// Parse and validate a raw request body.
    ///
    /// Every required field must be present and non-blank; `amount_value`
    /// must be a JSON number or string.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(ValidationError::NotAnObject);
        };

        Ok(Self {
            user_name: required_text(&fields, "user_name")?,
            amount_value: required_amount(&fields, "amount_value")?,
            purpose: required_text(&fields, "purpose")?,
            currency: required_text(&fields, "currency")?,
        })
    }

    pub fn into_record(self, id: String, create_time: jiff::Timestamp) -> CashTransaction {
        CashTransaction {
            id,
            user_name: self.user_name,
            amount_value: self.amount_value,
            purpose: self.purpose,
            amount_currency: self.currency,
            data_type: DATA_TYPE_CASH_PAYMENT.to_string(),
            create_time,
        }
    }
}

fn required_text(fields: &Map<String, Value>, name: &'static str) -> Result<String, ValidationError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::InvalidField {
            field: name,
            expected: "a string",
        }),
    }
}

fn required_amount(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<AmountValue, ValidationError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ValidationError::MissingField(name)),
        Some(Value::String(s)) => Ok(AmountValue::Text(s.clone())),
        Some(Value::Number(n)) => Ok(AmountValue::Number(n.clone())),
        Some(_) => Err(ValidationError::InvalidField {
            field: name,
            expected: "a number or a string",
        }),
    }
}
