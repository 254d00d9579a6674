use aws_sdk_dynamodb::Client;

use crate::attributes::Item;
use crate::error::StorageError;

/// One page of a table scan.
pub struct ScanOutput {
    pub items: Vec<Item>,
    /// Present when the scan stopped early (page limit or the 1 MB cap).
    pub last_evaluated_key: Option<Item>,
}

/// Put an item. Replaces any existing item with the same key.
pub async fn put_item(client: &Client, table: &str, item: Item) -> Result<(), StorageError> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .map_err(|e| StorageError::put_item(&e))?;

    Ok(())
}

/// Scan a single page of a table, unfiltered.
pub async fn scan_page(
    client: &Client,
    table: &str,
    limit: Option<i32>,
    exclusive_start_key: Option<Item>,
) -> Result<ScanOutput, StorageError> {
    let resp = client
        .scan()
        .table_name(table)
        .set_limit(limit)
        .set_exclusive_start_key(exclusive_start_key)
        .send()
        .await
        .map_err(|e| StorageError::scan(&e))?;

    Ok(ScanOutput {
        items: resp.items.unwrap_or_default(),
        last_evaluated_key: resp.last_evaluated_key.filter(|key| !key.is_empty()),
    })
}
