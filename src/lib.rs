//! # polkassembly
//!
//! Facade over [`polkassembly_core`], the wire schema for the Polkassembly
//! governance REST API.
//!
//! Everything is re-exported at the root, so `polkassembly::Post` and
//! `polkassembly_core::Post` are the same type. The `pa-schema` binary lives
//! in the `polkassembly-cli` crate.

pub use polkassembly_core::*;
