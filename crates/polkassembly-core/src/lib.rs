#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod codec;
pub mod domain;
pub mod error;
pub mod fidelity;
pub mod query;
pub mod registry;
mod wire;

// Re-export commonly used types for convenience
pub use codec::{decode, decode_response, encode};
pub use domain::*;
pub use error::{ApiError, CodecError, CodecResult};
pub use fidelity::{AddedKey, FidelityReport, compare, roundtrip};
pub use query::{append_query, to_query_pairs};
pub use registry::SchemaKind;
