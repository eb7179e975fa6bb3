//! weightlist-core: weighted multi-source value composition lists.
//!
//! An ordered list of independently animated value sources is blended into
//! one output value; edits are distributed back onto exactly one active
//! slot. Scalars, vectors, rotations, non-uniform scales and full affine
//! transforms share one engine, dispatched on the list's value kind.

pub mod combine;
pub mod config;
pub mod engine;
pub mod error;
pub mod list;
pub mod source;

// Re-exports for consumers
pub use combine::{combine_weighted, CombineOptions};
pub use config::ListConfig;
pub use engine::BlendList;
pub use error::ListError;
pub use list::{SourceList, DEFAULT_WEIGHT};
pub use source::{GetMethod, SetMethod, SourceHandle, SourceRef, ValueSource};
pub use weightlist_api_core::{DecomposedTransform, ScaleValue, Value, ValueKind};
