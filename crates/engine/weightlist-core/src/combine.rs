//! Weighted combination of homogeneous value entries.
//!
//! Every combine starts from a basis value — the kind's identity for
//! absolute evaluation, the caller's accumulator for relative evaluation —
//! and folds `(value, weight)` entries onto it in list order.

use weightlist_api_core::blend::{blend_quats, blend_transforms};
use weightlist_api_core::{DecomposedTransform, ScaleValue, Value, ValueKind};

/// Weights at or below this magnitude are treated as zero.
pub const WEIGHT_EPS: f32 = f32::EPSILON;

/// Flags steering a combine.
///
/// `average` normalizes scalar/vector sums and the position/scale weight of
/// transforms. `sequential` folds each entry onto the running result instead
/// of weighting it against identity; `against_basis` additionally makes the
/// fold interpolate away from the running result (transforms only, and only
/// meaningful while chaining — fan composition measures every entry against
/// the fixed basis, where the two weightings coincide).
#[derive(Copy, Clone, Debug, Default)]
pub struct CombineOptions {
    pub average: bool,
    pub sequential: bool,
    pub against_basis: bool,
}

#[inline]
fn lerp_f(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f(a[0], b[0], t),
        lerp_f(a[1], b[1], t),
        lerp_f(a[2], b[2], t),
    ]
}

fn total_weight(entries: &[(Value, f32)]) -> f32 {
    entries.iter().map(|(_, w)| *w).sum()
}

/// Combine `entries` onto `basis` per the rules of `kind`.
///
/// Entries whose value does not match `kind` are skipped; assignment-time
/// checking makes that a defensive path only.
pub fn combine_weighted(
    kind: ValueKind,
    basis: &Value,
    entries: &[(Value, f32)],
    opts: CombineOptions,
) -> Value {
    match kind {
        ValueKind::Float => combine_floats(basis, entries, opts),
        ValueKind::Vec3 | ValueKind::Position => combine_vec3(kind, basis, entries, opts),
        ValueKind::Vec4 => combine_vec4(basis, entries, opts),
        ValueKind::Rotation => combine_rotations(basis, entries, opts),
        ValueKind::Scale => combine_scales(basis, entries, opts),
        ValueKind::Transform => combine_transforms(basis, entries, opts),
    }
}

/// Fold a single full-weight value onto `base` using the kind's composition
/// rule: addition for scalars and vectors, left-composition for rotations,
/// multiplicative factors for scales, the affine fold for transforms.
pub fn apply_relative(kind: ValueKind, base: &Value, value: &Value) -> Value {
    combine_weighted(kind, base, &[(value.clone(), 1.0)], CombineOptions::default())
}

/// Normalizer for averaged sums; `None` when the summed weight is
/// degenerate and the whole combine should contribute nothing.
fn average_denominator(entries: &[(Value, f32)]) -> Option<f32> {
    let total = total_weight(entries);
    if total.abs() <= WEIGHT_EPS {
        log::debug!("degenerate weight sum {total}, averaged combine yields the basis");
        None
    } else {
        Some(total)
    }
}

fn combine_floats(basis: &Value, entries: &[(Value, f32)], opts: CombineOptions) -> Value {
    let mut acc = match basis {
        Value::Float(f) => *f,
        _ => 0.0,
    };
    let denom = if opts.average {
        match average_denominator(entries) {
            Some(t) => t,
            None => return Value::Float(acc),
        }
    } else {
        1.0
    };
    for (value, weight) in entries {
        if let Value::Float(v) = value {
            acc += v * weight / denom;
        }
    }
    Value::Float(acc)
}

fn combine_vec3(
    kind: ValueKind,
    basis: &Value,
    entries: &[(Value, f32)],
    opts: CombineOptions,
) -> Value {
    let mut acc = match basis {
        Value::Vec3(v) | Value::Position(v) => *v,
        _ => [0.0; 3],
    };
    let rebuild = |v: [f32; 3]| match kind {
        ValueKind::Position => Value::Position(v),
        _ => Value::Vec3(v),
    };
    let denom = if opts.average {
        match average_denominator(entries) {
            Some(t) => t,
            None => return rebuild(acc),
        }
    } else {
        1.0
    };
    for (value, weight) in entries {
        if let Value::Vec3(v) | Value::Position(v) = value {
            for i in 0..3 {
                acc[i] += v[i] * weight / denom;
            }
        }
    }
    rebuild(acc)
}

fn combine_vec4(basis: &Value, entries: &[(Value, f32)], opts: CombineOptions) -> Value {
    let mut acc = match basis {
        Value::Vec4(v) => *v,
        _ => [0.0; 4],
    };
    let denom = if opts.average {
        match average_denominator(entries) {
            Some(t) => t,
            None => return Value::Vec4(acc),
        }
    } else {
        1.0
    };
    for (value, weight) in entries {
        if let Value::Vec4(v) = value {
            for i in 0..4 {
                acc[i] += v[i] * weight / denom;
            }
        }
    }
    Value::Vec4(acc)
}

fn combine_rotations(basis: &Value, entries: &[(Value, f32)], opts: CombineOptions) -> Value {
    let mut acc = match basis {
        Value::Rotation(q) => *q,
        _ => weightlist_api_core::quat::IDENTITY,
    };
    for (value, weight) in entries {
        if weight.abs() <= WEIGHT_EPS {
            continue;
        }
        if let Value::Rotation(q) = value {
            acc = blend_quats(acc, *q, *weight, opts.sequential);
        }
    }
    Value::Rotation(acc)
}

fn combine_scales(basis: &Value, entries: &[(Value, f32)], opts: CombineOptions) -> Value {
    let mut acc = match basis {
        Value::Scale(s) => *s,
        _ => ScaleValue::identity(),
    };
    for (value, weight) in entries {
        if weight.abs() <= WEIGHT_EPS {
            continue;
        }
        if let Value::Scale(sv) = value {
            // The axis only means something while a scale is in play; with
            // both operands at unit factors it would define a shear axis out
            // of nothing, so it stays put.
            if acc.has_scale() || sv.has_scale() {
                acc.axis = blend_quats(acc.axis, sv.axis, *weight, opts.sequential);
            }
            acc.factors = if opts.sequential {
                lerp3(acc.factors, sv.factors, *weight)
            } else {
                let step = lerp3([1.0, 1.0, 1.0], sv.factors, *weight);
                [
                    acc.factors[0] * step[0],
                    acc.factors[1] * step[1],
                    acc.factors[2] * step[2],
                ]
            };
        }
    }
    Value::Scale(acc)
}

fn combine_transforms(basis: &Value, entries: &[(Value, f32)], opts: CombineOptions) -> Value {
    let mut acc = match basis {
        Value::Transform(t) => *t,
        _ => DecomposedTransform::identity(),
    };
    let total = total_weight(entries);
    // Fan composition weights every entry against the fixed basis, where
    // lerp-toward-target and weight-against-identity coincide.
    let against = opts.sequential && opts.against_basis;
    for (value, weight) in entries {
        if weight.abs() <= WEIGHT_EPS {
            continue;
        }
        if let Value::Transform(t) = value {
            let pos_scale_weight = if opts.average {
                if total.abs() > WEIGHT_EPS {
                    weight / total
                } else {
                    0.0
                }
            } else {
                *weight
            };
            // Rotation keeps the raw weight even when averaging.
            acc = blend_transforms(&acc, t, pos_scale_weight, *weight, against);
        }
    }
    Value::Transform(acc)
}
