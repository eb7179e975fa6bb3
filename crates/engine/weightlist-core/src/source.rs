//! Provider capability: the contract every list slot payload presents.
//!
//! Sources are owned by the host scene graph; lists hold weak references and
//! treat a dropped source as an empty slot.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use weightlist_api_core::{Value, ValueKind};

/// How a read composes with the caller's running value.
#[derive(Debug)]
pub enum GetMethod<'a> {
    /// Return the source's own value.
    Absolute,
    /// Fold the source's value onto the caller's accumulator.
    Relative(&'a Value),
}

/// How a write is interpreted by the receiving source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SetMethod {
    /// Replace the current value.
    Absolute,
    /// Apply as a delta on the current value.
    Relative,
}

/// An externally animated value a list slot can read and write.
pub trait ValueSource {
    fn value_kind(&self) -> ValueKind;

    /// Display name used when a slot has no explicit name of its own.
    fn descriptive_name(&self) -> String;

    fn get_value(&self, time: f32, method: GetMethod<'_>) -> Value;

    fn set_value(&mut self, time: f32, value: Value, commit: bool, method: SetMethod);
}

/// Shared handle the host keeps for a source.
pub type SourceHandle = Rc<RefCell<dyn ValueSource>>;

/// Non-owning handle a list slot keeps; upgrade fails once the host drops
/// the source.
pub type SourceRef = Weak<RefCell<dyn ValueSource>>;
