//! Blend primitives: weighted quaternion blending and the single affine
//! transform blend used for transform lists.
//!
//! `against_basis` selects the topology: `false` weights the target against
//! identity and folds the result onto the basis, `true` interpolates away
//! from the basis toward the target.

use crate::quat;
use crate::transform::DecomposedTransform;

#[inline]
fn lerp_f(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub(crate) fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f(a[0], b[0], t),
        lerp_f(a[1], b[1], t),
        lerp_f(a[2], b[2], t),
    ]
}

/// Blend `target` onto `basis` with `weight` clamped to [-1, 1].
///
/// A negative weight conjugates the target first: the rotation axis flips
/// while the angle magnitude is preserved. With `against_basis` the result
/// slerps from the basis toward the target; without it the weighted target
/// is composed onto the basis, weighted against identity.
pub fn blend_quats(basis: [f32; 4], target: [f32; 4], weight: f32, against_basis: bool) -> [f32; 4] {
    let mut w = weight.clamp(-1.0, 1.0);
    let mut q = quat::normalize(target);

    // Slerp only works with positive weights, so flip the rotation.
    if w < 0.0 {
        w = -w;
        q = quat::conjugate(q);
    }

    if against_basis {
        q = quat::make_closest(q, basis);
        quat::normalize(quat::slerp(basis, q, w))
    } else {
        q = quat::make_closest(q, quat::IDENTITY);
        let step = quat::normalize(quat::slerp(quat::IDENTITY, q, w));
        quat::normalize(quat::mul(step, basis))
    }
}

/// Blend two decomposed transforms.
///
/// `pos_scale_weight` drives translation and scale factors, unbounded;
/// `rotation_weight` drives rotation and the scale axis and is clamped to
/// [-1, 1] inside [`blend_quats`]. The scale axis is only touched when one
/// of the operands actually carries a scale, and the sign is carried through
/// rather than blended: the basis sign wins while the basis is scaled,
/// otherwise the target sign is adopted.
pub fn blend_transforms(
    basis: &DecomposedTransform,
    target: &DecomposedTransform,
    pos_scale_weight: f32,
    rotation_weight: f32,
    against_basis: bool,
) -> DecomposedTransform {
    let translation = if against_basis {
        lerp3(basis.translation, target.translation, pos_scale_weight)
    } else {
        [
            basis.translation[0] + target.translation[0] * pos_scale_weight,
            basis.translation[1] + target.translation[1] * pos_scale_weight,
            basis.translation[2] + target.translation[2] * pos_scale_weight,
        ]
    };

    let rotation = blend_quats(basis.rotation, target.rotation, rotation_weight, against_basis);

    let scale_axis = if basis.has_scale() || target.has_scale() {
        blend_quats(
            basis.scale_axis,
            target.scale_axis,
            rotation_weight,
            against_basis,
        )
    } else {
        basis.scale_axis
    };

    // Fold signs into the factors before weighting.
    let bk = [
        basis.scale[0] * basis.sign,
        basis.scale[1] * basis.sign,
        basis.scale[2] * basis.sign,
    ];
    let tk = [
        target.scale[0] * target.sign,
        target.scale[1] * target.sign,
        target.scale[2] * target.sign,
    ];
    let folded = if against_basis {
        // Treat the target scale as applied on top of the basis, then weight
        // the difference.
        let affected = [bk[0] * tk[0], bk[1] * tk[1], bk[2] * tk[2]];
        [
            bk[0] + (affected[0] - bk[0]) * pos_scale_weight,
            bk[1] + (affected[1] - bk[1]) * pos_scale_weight,
            bk[2] + (affected[2] - bk[2]) * pos_scale_weight,
        ]
    } else {
        [
            bk[0] + (tk[0] - 1.0) * pos_scale_weight,
            bk[1] + (tk[1] - 1.0) * pos_scale_weight,
            bk[2] + (tk[2] - 1.0) * pos_scale_weight,
        ]
    };

    let sign = if basis.has_scale() {
        basis.sign
    } else {
        target.sign
    };
    // sign is ±1, so multiplying un-signs the folded factors while keeping
    // scale * sign intact.
    let scale = [folded[0] * sign, folded[1] * sign, folded[2] * sign];

    DecomposedTransform {
        translation,
        rotation,
        scale_axis,
        scale,
        sign,
    }
}
