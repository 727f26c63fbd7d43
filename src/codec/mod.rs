//! Level file encoding

/// Capped run-length encoding
pub mod run_length;
/// Trim, transpose and header generation for level text
pub mod serializer;

pub use run_length::{Token, encode_run_length};
pub use serializer::{SavePayload, build_save_payload};
