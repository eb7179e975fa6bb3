//! Ordered container of weighted value sources.
//!
//! The list owns slot metadata (weight, name, tag) and two independent
//! cursors, but never the sources themselves: slots hold weak references and
//! a dropped source simply makes its slot empty.

use crate::error::ListError;
use crate::source::{SourceHandle, SourceRef};
use weightlist_api_core::ValueKind;

/// Default weight for a freshly created slot.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// One list entry: a weak source reference plus its metadata.
#[derive(Default)]
pub(crate) struct SubSource {
    source: Option<SourceRef>,
    weight: f32,
    name: Option<String>,
    tag: String,
}

impl SubSource {
    fn empty() -> Self {
        Self {
            source: None,
            weight: DEFAULT_WEIGHT,
            name: None,
            tag: String::new(),
        }
    }
}

/// Dense, ordered slot list with active and index-mode cursors.
///
/// Slot order is significant: chain composition folds entries in order and
/// name lookup resolves ties by taking the first match. The two cursors
/// evolve independently; switching modes never resets either.
pub struct SourceList {
    kind: ValueKind,
    slots: Vec<SubSource>,
    active: usize,
    index_mode_index: usize,
}

impl SourceList {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            slots: Vec::new(),
            active: 0,
            index_mode_index: 0,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store `source` at `slot`, extending the list by one when `slot` is at
    /// (or past) the end, replacing and releasing any prior occupant
    /// otherwise. A source of the wrong kind is rejected and the list is
    /// left unchanged.
    pub fn assign(&mut self, slot: usize, source: &SourceHandle) -> Result<(), ListError> {
        let actual = source.borrow().value_kind();
        if actual != self.kind {
            log::warn!(
                "rejecting source assignment at slot {slot}: list holds {:?}, source provides {actual:?}",
                self.kind
            );
            return Err(ListError::TypeMismatch {
                expected: self.kind,
                actual,
            });
        }

        let slot = slot.min(self.slots.len());
        if slot == self.slots.len() {
            self.slots.push(SubSource::empty());
        }
        self.slots[slot].source = Some(SourceHandle::downgrade(source));
        Ok(())
    }

    /// Release the source at `slot`; the slot itself stays, behaving as
    /// empty. Out-of-range slots are ignored.
    pub fn clear(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            entry.source = None;
        }
    }

    /// Live source handle for `slot`, if the slot is occupied and the host
    /// still owns the source.
    pub fn source(&self, slot: usize) -> Option<SourceHandle> {
        self.slots.get(slot)?.source.as_ref()?.upgrade()
    }

    /// Weight of `slot`; invalid slots read as 0.0.
    pub fn weight(&self, slot: usize) -> f32 {
        self.slots.get(slot).map_or(0.0, |s| s.weight)
    }

    /// Set the weight of `slot`; out-of-range writes are ignored.
    pub fn set_weight(&mut self, slot: usize, weight: f32) {
        if let Some(entry) = self.slots.get_mut(slot) {
            entry.weight = weight;
        }
    }

    /// Effective display name: the explicit slot name when set, the source's
    /// own descriptive name otherwise. Invalid or empty slots read as "".
    pub fn name(&self, slot: usize) -> String {
        let Some(entry) = self.slots.get(slot) else {
            return String::new();
        };
        if let Some(name) = &entry.name {
            if !name.is_empty() {
                return name.clone();
            }
        }
        entry
            .source
            .as_ref()
            .and_then(|s| s.upgrade())
            .map_or_else(String::new, |s| s.borrow().descriptive_name())
    }

    /// Override the display name of `slot`; empty names are ignored so the
    /// source fallback stays in effect.
    pub fn set_name(&mut self, slot: usize, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        if let Some(entry) = self.slots.get_mut(slot) {
            entry.name = Some(name);
        }
    }

    pub fn tag(&self, slot: usize) -> String {
        self.slots.get(slot).map_or_else(String::new, |s| s.tag.clone())
    }

    pub fn set_tag(&mut self, slot: usize, tag: impl Into<String>) {
        if let Some(entry) = self.slots.get_mut(slot) {
            entry.tag = tag.into();
        }
    }

    /// Weight-mode active cursor, clamped into the current slot range.
    pub fn active(&self) -> usize {
        clamp_cursor(self.active, self.slots.len())
    }

    /// Move the weight-mode active cursor; out-of-range values clamp.
    pub fn set_active(&mut self, slot: isize) {
        self.active = clamp_signed(slot, self.slots.len());
    }

    /// Index-mode cursor, clamped into the current slot range.
    pub fn index_mode_index(&self) -> usize {
        clamp_cursor(self.index_mode_index, self.slots.len())
    }

    /// Move the index-mode cursor; independent of the active cursor.
    pub fn set_index_mode_index(&mut self, slot: isize) {
        self.index_mode_index = clamp_signed(slot, self.slots.len());
    }

    /// Point the index-mode cursor at the first slot whose effective name
    /// contains `pattern`, case-insensitively. Returns false and changes
    /// nothing for an empty pattern or when nothing matches.
    pub fn set_index_by_name(&mut self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let needle = pattern.to_lowercase();
        for slot in 0..self.slots.len() {
            if self.name(slot).to_lowercase().contains(&needle) {
                self.index_mode_index = slot;
                return true;
            }
        }
        false
    }

    /// Insert an empty slot at `slot`, shifting later entries down. Both
    /// cursors shift with the occupant they were tracking.
    pub fn insert(&mut self, slot: usize) -> Result<(), ListError> {
        if slot > self.slots.len() {
            return Err(ListError::InvalidSlot {
                slot,
                len: self.slots.len(),
            });
        }
        let had_occupants = !self.slots.is_empty();
        self.slots.insert(slot, SubSource::empty());
        if had_occupants {
            if slot <= self.active {
                self.active += 1;
            }
            if slot <= self.index_mode_index {
                self.index_mode_index += 1;
            }
        }
        Ok(())
    }

    /// Remove `slot`, preserving the order of the remaining entries. Cursors
    /// past the removed slot shift back by one; a cursor on the removed slot
    /// stays put and lands on the successor.
    pub fn remove(&mut self, slot: usize) -> Result<(), ListError> {
        if slot >= self.slots.len() {
            return Err(ListError::InvalidSlot {
                slot,
                len: self.slots.len(),
            });
        }
        self.slots.remove(slot);
        if slot < self.active {
            self.active -= 1;
        }
        if slot < self.index_mode_index {
            self.index_mode_index -= 1;
        }
        self.active = clamp_cursor(self.active, self.slots.len());
        self.index_mode_index = clamp_cursor(self.index_mode_index, self.slots.len());
        Ok(())
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}

fn clamp_signed(slot: isize, len: usize) -> usize {
    if slot < 0 {
        0
    } else {
        clamp_cursor(slot as usize, len)
    }
}
