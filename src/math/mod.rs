use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Converts a unit direction to normalized latitude/longitude coordinates.
///
/// Returns `(u, v)` where `u` is the longitude in [0, 1) measured from
/// `atan2(x, z)`, and `v = acos(y) / PI` is the latitude in [0, 1] with
/// 0 at the +Y pole and 1 at the -Y pole. Applying angular deltas in this
/// parametrization avoids the numerical drift that accumulates when
/// rotating Cartesian offsets frame after frame.
pub fn to_lat_long(dir: Vec3) -> (f32, f32) {
    let phi = dir.x.atan2(dir.z);
    let theta = dir.y.clamp(-1.0, 1.0).acos();
    ((PI + phi) / TAU, theta / PI)
}

/// Inverse of [`to_lat_long`]: rebuilds a unit direction from normalized
/// latitude/longitude coordinates.
pub fn from_lat_long(u: f32, v: f32) -> Vec3 {
    let phi = u * TAU;
    let theta = v * PI;
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    Vec3::new(-st * sp, ct, -st * cp)
}
