//! # recordhook-core
//!
//! Core crate for recordhook. Contains the unified error system,
//! configuration schemas, typed identifiers, the demo record types,
//! value predicates, and the [`MessageSink`](traits::MessageSink)
//! capability implemented by `recordhook-sink`.
//!
//! This crate has **no** internal dependencies on other recordhook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
