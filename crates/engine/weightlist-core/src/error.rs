//! Error types for list mutation.
//!
//! Only structural mutations report errors; everything on the per-frame
//! evaluation path degrades to neutral values instead.

use thiserror::Error;
use weightlist_api_core::ValueKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A source of the wrong value kind was assigned to a slot.
    #[error("value kind mismatch: list holds {expected:?}, source provides {actual:?}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A structural edit addressed a slot outside the list.
    #[error("slot {slot} out of range for list of {len}")]
    InvalidSlot { slot: usize, len: usize },
}
