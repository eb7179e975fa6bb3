//! Quaternion helpers on `[f32; 4]` (x, y, z, w).

/// Identity quaternion.
pub const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[inline]
fn lerp_f(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Normalize a quaternion; a zero quaternion normalizes to identity.
pub fn normalize(q: [f32; 4]) -> [f32; 4] {
    let mag = dot(q, q).sqrt();
    if mag == 0.0 {
        IDENTITY
    } else {
        [q[0] / mag, q[1] / mag, q[2] / mag, q[3] / mag]
    }
}

/// Conjugate; for unit quaternions this is the inverse rotation.
#[inline]
pub fn conjugate(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Hamilton product `a ⊗ b`: the rotation `b` followed by `a`.
pub fn mul(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    let (ax, ay, az, aw) = (a[0], a[1], a[2], a[3]);
    let (bx, by, bz, bw) = (b[0], b[1], b[2], b[3]);
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Flip `q` onto the hemisphere of `reference` so a subsequent slerp takes
/// the shortest path.
pub fn make_closest(q: [f32; 4], reference: [f32; 4]) -> [f32; 4] {
    if dot(q, reference) < 0.0 {
        [-q[0], -q[1], -q[2], -q[3]]
    } else {
        q
    }
}

/// Slerp between two unit quaternions.
pub fn slerp(q1: [f32; 4], q2: [f32; 4], t: f32) -> [f32; 4] {
    let qa = normalize(q1);
    let mut qb = normalize(q2);

    let mut dot = self::dot(qa, qb);

    // If the dot product is negative, slerp won't take the short path.
    // Fix by reversing one quaternion.
    if dot < 0.0 {
        qb = [-qb[0], -qb[1], -qb[2], -qb[3]];
        dot = -dot;
    }

    // If quaternions are close, use lerp
    const DOT_THRESHOLD: f32 = 0.9995;
    if dot > DOT_THRESHOLD {
        let res = [
            lerp_f(qa[0], qb[0], t),
            lerp_f(qa[1], qb[1], t),
            lerp_f(qa[2], qb[2], t),
            lerp_f(qa[3], qb[3], t),
        ];
        return normalize(res);
    }

    let theta_0 = dot.clamp(-1.0, 1.0).acos();
    let theta = theta_0 * t;
    let sin_theta = theta.sin();
    let sin_theta_0 = theta_0.sin();

    let s0 = ((theta_0 - theta).sin()) / sin_theta_0;
    let s1 = sin_theta / sin_theta_0;

    [
        s0 * qa[0] + s1 * qb[0],
        s0 * qa[1] + s1 * qb[1],
        s0 * qa[2] + s1 * qb[2],
        s0 * qa[3] + s1 * qb[3],
    ]
}

/// Quaternion for a rotation of `angle` radians about a unit `axis`.
pub fn from_axis_angle(axis: [f32; 3], angle: f32) -> [f32; 4] {
    let half = 0.5 * angle;
    let s = half.sin();
    [axis[0] * s, axis[1] * s, axis[2] * s, half.cos()]
}
