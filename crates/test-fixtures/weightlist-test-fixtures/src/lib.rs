//! Shared test fixtures: in-memory value sources standing in for a host
//! scene graph.

use std::cell::RefCell;
use std::rc::Rc;

use weightlist_core::combine::apply_relative;
use weightlist_core::{GetMethod, SetMethod, SourceHandle, Value, ValueKind, ValueSource};

/// A source holding one mutable value, ignoring evaluation time.
pub struct StaticSource {
    name: String,
    value: Value,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Wrap into the shared handle shape lists consume.
    pub fn handle(name: impl Into<String>, value: Value) -> SourceHandle {
        Rc::new(RefCell::new(Self::new(name, value)))
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl ValueSource for StaticSource {
    fn value_kind(&self) -> ValueKind {
        self.value.kind()
    }

    fn descriptive_name(&self) -> String {
        self.name.clone()
    }

    fn get_value(&self, _time: f32, method: GetMethod<'_>) -> Value {
        match method {
            GetMethod::Absolute => self.value.clone(),
            GetMethod::Relative(base) => apply_relative(self.value.kind(), base, &self.value),
        }
    }

    fn set_value(&mut self, _time: f32, value: Value, _commit: bool, method: SetMethod) {
        if value.kind() != self.value.kind() {
            return;
        }
        self.value = match method {
            SetMethod::Absolute => value,
            SetMethod::Relative => apply_relative(self.value.kind(), &self.value, &value),
        };
    }
}

/// A float source ramping linearly with evaluation time: `base + slope * t`.
pub struct RampSource {
    name: String,
    base: f32,
    slope: f32,
}

impl RampSource {
    pub fn handle(name: impl Into<String>, base: f32, slope: f32) -> SourceHandle {
        Rc::new(RefCell::new(Self {
            name: name.into(),
            base,
            slope,
        }))
    }
}

impl ValueSource for RampSource {
    fn value_kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn descriptive_name(&self) -> String {
        self.name.clone()
    }

    fn get_value(&self, time: f32, method: GetMethod<'_>) -> Value {
        let v = self.base + self.slope * time;
        match method {
            GetMethod::Absolute => Value::Float(v),
            GetMethod::Relative(base) => match base {
                Value::Float(b) => Value::Float(b + v),
                _ => Value::Float(v),
            },
        }
    }

    fn set_value(&mut self, time: f32, value: Value, _commit: bool, method: SetMethod) {
        // A write re-bases the ramp so the requested value holds at `time`.
        if let Value::Float(v) = value {
            match method {
                SetMethod::Absolute => self.base = v - self.slope * time,
                SetMethod::Relative => self.base += v,
            }
        }
    }
}
