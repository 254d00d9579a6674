//! rcw-core
//!
//! Pure domain types, id generation, and parameter naming conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the RCW backend.

pub mod error;
pub mod models;
pub mod parameter_names;
pub mod transaction_id;
