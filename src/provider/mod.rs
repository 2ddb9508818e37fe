//! Value providers, the collaborator whose value the handler returns.
//!
//! A provider is built, read once, and dropped within a single invocation.

pub mod shared;

pub use self::shared::{SharedValue, DEFAULT_SHARED_VALUE};

use serde::Serialize;

/// Supplies the value embedded under `message` in the response body.
pub trait ValueProvider {
    type Value: Serialize;

    /// Read the current value. Synchronous, no declared failure mode.
    fn get_value(&self) -> Self::Value;
}
