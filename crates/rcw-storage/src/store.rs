use std::future::Future;
use std::pin::Pin;

use aws_sdk_dynamodb::Client;
use rcw_core::models::transaction::CashTransaction;

use crate::error::StorageError;
use crate::page::{Page, PageRequest};
use crate::records;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Durable storage for transaction records.
///
/// Methods return boxed futures for dyn compatibility.
pub trait RecordStore: Send + Sync {
    /// Write a record. No overwrite check: a colliding id silently replaces.
    fn put_transaction<'a>(
        &'a self,
        record: &'a CashTransaction,
    ) -> BoxFuture<'a, Result<(), StorageError>>;

    /// Read one page of records, unfiltered and unordered.
    fn scan_transactions<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> BoxFuture<'a, Result<Page<CashTransaction>, StorageError>>;
}

/// `RecordStore` backed by a DynamoDB table keyed on `id`.
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl RecordStore for DynamoStore {
    fn put_transaction<'a>(
        &'a self,
        record: &'a CashTransaction,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            records::put_record(&self.client, &self.table, record).await?;
            tracing::info!(table = %self.table, id = %record.id, "transaction stored");
            Ok(())
        })
    }

    fn scan_transactions<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> BoxFuture<'a, Result<Page<CashTransaction>, StorageError>> {
        Box::pin(async move {
            let page = records::scan_records(&self.client, &self.table, request).await?;
            tracing::info!(
                table = %self.table,
                count = page.items.len(),
                more = page.next_token.is_some(),
                "transactions scanned"
            );
            Ok(page)
        })
    }
}
