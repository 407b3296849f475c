//! Shared utilities for beeutil
//!
//! Currently this holds the tracing/logging setup shared by binaries.

pub mod tracing;

pub use self::tracing::init;
