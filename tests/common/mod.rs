//! Common test utilities.
//!
//! Shared fixture loading for the integration suites.

pub mod fixtures;
