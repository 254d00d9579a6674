//! rcw-auth
//!
//! Cognito user-pool sign-up, sign-in, and profile lookup.

pub mod client;
pub mod error;
pub mod flows;
pub mod models;
pub mod provider;
