//! Core value kinds and typed values for list composition.
//! All numeric types use f32.

use serde::{Deserialize, Serialize};

use crate::transform::{DecomposedTransform, ScaleValue};

/// Coarse tag for a [`Value`]. Every slot of one list shares a single kind,
/// fixed when the list is created.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec3,
    Vec4,
    Position,
    Rotation,
    Scale,
    Transform,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float
    Float(f32),

    /// 3D vector
    Vec3([f32; 3]),

    /// 4D vector
    Vec4([f32; 4]),

    /// Position, blended like Vec3 but tagged separately
    Position([f32; 3]),

    /// Rotation quaternion (x, y, z, w)
    Rotation([f32; 4]),

    /// Non-uniform scale with its rotation axis
    Scale(ScaleValue),

    /// Decomposed affine transform
    Transform(DecomposedTransform),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Position(_) => ValueKind::Position,
            Value::Rotation(_) => ValueKind::Rotation,
            Value::Scale(_) => ValueKind::Scale,
            Value::Transform(_) => ValueKind::Transform,
        }
    }

    /// Neutral element for a kind: zero for scalars and vectors, the identity
    /// quaternion for rotations, unit factors for scales.
    pub fn identity(kind: ValueKind) -> Value {
        match kind {
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Vec3 => Value::Vec3([0.0; 3]),
            ValueKind::Vec4 => Value::Vec4([0.0; 4]),
            ValueKind::Position => Value::Position([0.0; 3]),
            ValueKind::Rotation => Value::Rotation(crate::quat::IDENTITY),
            ValueKind::Scale => Value::Scale(ScaleValue::identity()),
            ValueKind::Transform => Value::Transform(DecomposedTransform::identity()),
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    pub fn vec3(x: f32, y: f32, z: f32) -> Self {
        Value::Vec3([x, y, z])
    }

    pub fn position(x: f32, y: f32, z: f32) -> Self {
        Value::Position([x, y, z])
    }

    pub fn rotation(x: f32, y: f32, z: f32, w: f32) -> Self {
        Value::Rotation([x, y, z, w])
    }
}
