//! rcw-params
//!
//! SSM Parameter Store lookups for per-environment configuration.

pub mod client;
pub mod error;
pub mod parameters;
pub mod source;
