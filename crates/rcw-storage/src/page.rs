//! Pagination request/response types and the continuation-token codec.
//!
//! A continuation token is the scan's `LastEvaluatedKey`, rendered as JSON
//! and encoded with URL-safe unpadded base64. Callers treat it as opaque.
//! Decoding only accepts the table's key shape: a single string `id` holding
//! a transaction id.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rcw_core::transaction_id;
use serde_json::Value;

use crate::attributes::{self, Item};
use crate::error::StorageError;

pub const MAX_PAGE_SIZE: u32 = 1000;

/// The table's partition key, and the only attribute of a scan key.
pub const KEY_ATTRIBUTE: &str = "id";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Upper bound on items examined. `None` uses the store's own page size.
    pub limit: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
    /// Stored items on this page that did not decode as `T`.
    pub skipped: usize,
}

pub fn encode_token(key: Item) -> Result<String, StorageError> {
    let object = attributes::item_to_object(key)?;
    let json = serde_json::to_vec(&Value::Object(object))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_token(token: &str) -> Result<Item, StorageError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| StorageError::InvalidToken(e.to_string()))?;
    let fields = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => return Err(StorageError::InvalidToken("not a key object".to_string())),
        Err(e) => return Err(StorageError::InvalidToken(e.to_string())),
    };

    let key_is_valid = fields.len() == 1
        && matches!(
            fields.get(KEY_ATTRIBUTE),
            Some(Value::String(id)) if transaction_id::is_valid(id)
        );
    if !key_is_valid {
        return Err(StorageError::InvalidToken(format!(
            "expected a single string `{KEY_ATTRIBUTE}` key"
        )));
    }
    Ok(attributes::object_to_item(fields))
}
