//! Decomposed affine transform and non-uniform scale value types.

use serde::{Deserialize, Serialize};

use crate::quat;

/// Tolerance below which scale factors count as identity.
pub(crate) const SCALE_EPS: f32 = 1e-6;

/// Non-uniform scale: per-axis factors applied in the frame given by `axis`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScaleValue {
    pub factors: [f32; 3],
    /// Quaternion (x, y, z, w) orienting the scale axes.
    pub axis: [f32; 4],
}

impl ScaleValue {
    pub fn identity() -> Self {
        Self {
            factors: [1.0, 1.0, 1.0],
            axis: quat::IDENTITY,
        }
    }

    pub fn uniform(s: f32) -> Self {
        Self {
            factors: [s, s, s],
            axis: quat::IDENTITY,
        }
    }

    /// True when the factors differ from (1,1,1); an identity scale leaves
    /// the axis meaningless.
    pub fn has_scale(&self) -> bool {
        factors_nontrivial(self.factors, 1.0)
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::identity()
    }
}

/// One affine transform split into blendable parts:
/// translation, rotation, scale-rotation axis, per-axis scale factors and a
/// handedness sign.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecomposedTransform {
    pub translation: [f32; 3],
    /// Quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    /// Frame in which the scale factors apply.
    pub scale_axis: [f32; 4],
    pub scale: [f32; 3],
    /// +1 or -1; a negative sign flips handedness.
    pub sign: f32,
}

impl DecomposedTransform {
    pub fn identity() -> Self {
        Self {
            translation: [0.0; 3],
            rotation: quat::IDENTITY,
            scale_axis: quat::IDENTITY,
            scale: [1.0, 1.0, 1.0],
            sign: 1.0,
        }
    }

    pub fn from_translation(t: [f32; 3]) -> Self {
        Self {
            translation: t,
            ..Self::identity()
        }
    }

    pub fn from_rotation(q: [f32; 4]) -> Self {
        Self {
            rotation: q,
            ..Self::identity()
        }
    }

    pub fn from_scale(s: [f32; 3]) -> Self {
        Self {
            scale: s,
            ..Self::identity()
        }
    }

    /// True when `scale * sign` differs from (1,1,1).
    pub fn has_scale(&self) -> bool {
        factors_nontrivial(self.scale, self.sign)
    }
}

impl Default for DecomposedTransform {
    fn default() -> Self {
        Self::identity()
    }
}

fn factors_nontrivial(factors: [f32; 3], sign: f32) -> bool {
    factors
        .iter()
        .any(|k| (k * sign - 1.0).abs() > SCALE_EPS)
}
