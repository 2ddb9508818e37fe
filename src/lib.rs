//! Shared Layer API: shared library
//!
//! This crate is the shared layer every serverless function links against:
//! the value provider, the response models, and the request handler.
//!
//! Each function binary (`api/` for Vercel, `src/bin/` for AWS Lambda)
//! stays a thin adapter over [`handler::handle_with`].

pub mod config;
pub mod encoding;
pub mod error;
pub mod handler;
pub mod models;
pub mod provider;
pub mod telemetry;
