//! rcw-storage
//!
//! DynamoDB operations. Thin wrapper around the AWS DynamoDB SDK, plus the
//! `RecordStore` seam the Lambda handlers are written against.

pub mod attributes;
pub mod client;
pub mod error;
pub mod items;
pub mod page;
pub mod records;
pub mod store;
