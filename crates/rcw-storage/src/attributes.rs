//! Conversion between JSON values and DynamoDB attribute values.
//!
//! Records are serialized with serde to a JSON object, then mapped attribute
//! by attribute. Numbers travel as `N` strings; sets read back as arrays;
//! binary values read back as standard base64 strings.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::StorageError;

pub type Item = HashMap<String, AttributeValue>;

pub fn from_json(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => AttributeValue::L(values.into_iter().map(from_json).collect()),
        Value::Object(fields) => AttributeValue::M(object_to_item(fields)),
    }
}

pub fn to_json(value: AttributeValue) -> Result<Value, StorageError> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => Value::Number(parse_number(&n)?),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(item_to_object(fields)?),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|b| Value::String(STANDARD.encode(b.as_ref())))
                .collect(),
        ),
        other => return Err(StorageError::UnsupportedAttribute(format!("{other:?}"))),
    };
    Ok(json)
}

pub fn object_to_item(fields: Map<String, Value>) -> Item {
    fields
        .into_iter()
        .map(|(name, value)| (name, from_json(value)))
        .collect()
}

pub fn item_to_object(item: Item) -> Result<Map<String, Value>, StorageError> {
    item.into_iter()
        .map(|(name, value)| to_json(value).map(|json| (name, json)))
        .collect()
}

/// Serialize a record into a DynamoDB item. The record must serialize to a
/// JSON object.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, StorageError> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(object_to_item(fields)),
        _ => Err(StorageError::NotAnObject),
    }
}

pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, StorageError> {
    let object = item_to_object(item)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

fn parse_number(n: &str) -> Result<Number, StorageError> {
    serde_json::from_str::<Number>(n)
        .map_err(|_| StorageError::UnsupportedAttribute(format!("N({n})")))
}
