//! BlendList: composition over a [`SourceList`].
//!
//! Reads compose every live slot's value per the flag matrix; writes are
//! routed to exactly one slot. A list is itself a [`ValueSource`], so lists
//! nest the way any other source does.

use crate::combine::{apply_relative, combine_weighted, CombineOptions};
use crate::error::ListError;
use crate::list::SourceList;
use crate::source::{GetMethod, SetMethod, SourceHandle, ValueSource};
use weightlist_api_core::{Value, ValueKind};

/// A list of weighted value sources blended into a single value.
///
/// Four flags span the behavior space. `index_mode` bypasses blending and
/// passes one slot through verbatim. `average` normalizes weights.
/// `sequential` and `against_basis` pick the composition topology for
/// transform lists; both are carried (and ignored) for the other kinds.
/// Flags have no transition side effects and nothing is cached between
/// calls: a read is a pure function of slot values and flags.
pub struct BlendList {
    list: SourceList,
    name: String,
    tag: String,
    index_mode: bool,
    average: bool,
    sequential: bool,
    against_basis: bool,
}

impl BlendList {
    pub fn new(kind: ValueKind) -> Self {
        Self {
            list: SourceList::new(kind),
            name: String::new(),
            tag: String::new(),
            index_mode: false,
            average: false,
            sequential: false,
            against_basis: false,
        }
    }

    pub fn with_name(kind: ValueKind, name: impl Into<String>) -> Self {
        let mut out = Self::new(kind);
        out.name = name.into();
        out
    }

    pub fn kind(&self) -> ValueKind {
        self.list.kind()
    }

    pub fn list(&self) -> &SourceList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SourceList {
        &mut self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Assign a source to `slot`, growing the list by one when `slot` is at
    /// the end. Sources of the wrong kind are rejected and the list is left
    /// unchanged.
    pub fn assign(&mut self, slot: usize, source: &SourceHandle) -> Result<(), ListError> {
        self.list.assign(slot, source)
    }

    pub fn index_mode(&self) -> bool {
        self.index_mode
    }

    pub fn set_index_mode(&mut self, on: bool) {
        self.index_mode = on;
    }

    pub fn average(&self) -> bool {
        self.average
    }

    pub fn set_average(&mut self, on: bool) {
        self.average = on;
    }

    pub fn sequential(&self) -> bool {
        self.sequential
    }

    pub fn set_sequential(&mut self, on: bool) {
        self.sequential = on;
    }

    pub fn against_basis(&self) -> bool {
        self.against_basis
    }

    pub fn set_against_basis(&mut self, on: bool) {
        self.against_basis = on;
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// The slot writes land on: the index-mode cursor while index mode is
    /// engaged, the weight-mode active cursor otherwise.
    pub fn active_slot(&self) -> usize {
        if self.index_mode {
            self.list.index_mode_index()
        } else {
            self.list.active()
        }
    }

    fn options(&self) -> CombineOptions {
        CombineOptions {
            average: self.average,
            sequential: self.sequential,
            against_basis: self.against_basis,
        }
    }

    /// Absolute value of one slot; empty or dead slots read as identity.
    fn slot_value(&self, slot: usize, time: f32) -> Option<Value> {
        let source = self.list.source(slot)?;
        let value = source.borrow().get_value(time, GetMethod::Absolute);
        if value.kind() == self.kind() {
            Some(value)
        } else {
            None
        }
    }

    /// Compose the list at `time`.
    ///
    /// An empty list yields the kind's identity under every flag
    /// combination, including relative reads. In index mode the index-mode
    /// slot passes through verbatim, weights ignored. Otherwise every live
    /// slot contributes `(value, weight)` to a single weighted combine, with
    /// the relative accumulator threaded through as the basis.
    pub fn get_value(&self, time: f32, method: GetMethod<'_>) -> Value {
        let kind = self.kind();
        let identity = Value::identity(kind);
        if self.list.is_empty() {
            return identity;
        }

        if self.index_mode {
            let slot = self.list.index_mode_index();
            let value = self.slot_value(slot, time).unwrap_or(identity);
            return match method {
                GetMethod::Absolute => value,
                GetMethod::Relative(base) => apply_relative(kind, base, &value),
            };
        }

        let mut entries = Vec::with_capacity(self.list.len());
        for slot in 0..self.list.len() {
            if let Some(value) = self.slot_value(slot, time) {
                entries.push((value, self.list.weight(slot)));
            }
        }

        let basis = match method {
            GetMethod::Absolute => identity,
            GetMethod::Relative(base) => base.clone(),
        };
        combine_weighted(kind, &basis, &entries, self.options())
    }

    /// Route a write to the active slot, unchanged.
    ///
    /// The receiving slot gets the full value regardless of its weight; the
    /// weight only scales that slot's contribution to subsequent reads.
    /// Empty lists and dead slots are no-ops, as are values of the wrong
    /// kind.
    pub fn set_value(&mut self, time: f32, value: Value, commit: bool, method: SetMethod) {
        if self.list.is_empty() {
            return;
        }
        if value.kind() != self.kind() {
            log::warn!(
                "dropping write of {:?} value into {:?} list",
                value.kind(),
                self.kind()
            );
            return;
        }
        let slot = self.active_slot();
        if let Some(source) = self.list.source(slot) {
            source.borrow_mut().set_value(time, value, commit, method);
        }
    }
}

impl ValueSource for BlendList {
    fn value_kind(&self) -> ValueKind {
        self.kind()
    }

    fn descriptive_name(&self) -> String {
        self.name.clone()
    }

    fn get_value(&self, time: f32, method: GetMethod<'_>) -> Value {
        BlendList::get_value(self, time, method)
    }

    fn set_value(&mut self, time: f32, value: Value, commit: bool, method: SetMethod) {
        BlendList::set_value(self, time, value, commit, method);
    }
}
