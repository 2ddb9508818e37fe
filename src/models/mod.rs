//! Data model for a single invocation.
//!
//! These types are shared by the handler and every function entrypoint.

pub mod envelope;
pub mod invocation;
