use aws_sdk_dynamodb::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::attributes;
use crate::error::StorageError;
use crate::items;
use crate::page::{self, Page, PageRequest};

/// Serialize a record and put it into the table.
pub async fn put_record<T: Serialize>(
    client: &Client,
    table: &str,
    record: &T,
) -> Result<(), StorageError> {
    let item = attributes::to_item(record)?;
    items::put_item(client, table, item).await
}

/// Scan one page of records.
///
/// Items that do not decode as `T` are skipped, logged, and counted in
/// `Page::skipped`; they still count against the page limit.
pub async fn scan_records<T: DeserializeOwned>(
    client: &Client,
    table: &str,
    request: &PageRequest,
) -> Result<Page<T>, StorageError> {
    let start_key = request
        .next_token
        .as_deref()
        .map(page::decode_token)
        .transpose()?;
    let limit = request.limit.map(|l| l.min(page::MAX_PAGE_SIZE) as i32);

    let output = items::scan_page(client, table, limit, start_key).await?;

    let (records, skipped) = decode_records(output.items);
    let next_token = output.last_evaluated_key.map(page::encode_token).transpose()?;

    Ok(Page {
        items: records,
        next_token,
        skipped,
    })
}

/// Decode scanned items, returning the records and the number skipped.
pub fn decode_records<T: DeserializeOwned>(items: Vec<attributes::Item>) -> (Vec<T>, usize) {
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in items {
        let id = item
            .get("id")
            .and_then(|v| v.as_s().ok())
            .cloned()
            .unwrap_or_default();
        match attributes::from_item::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                tracing::warn!(id = %id, error = %e, "skipping undecodable item");
            }
        }
    }
    (records, skipped)
}
