use glam::{Mat4, Vec2, Vec3};

use crate::math::{from_lat_long, to_lat_long};

/// Closest allowed target-to-position distance.
pub const DOLLY_NEAR: f32 = 1.0;
/// Farthest allowed target-to-position distance.
pub const DOLLY_FAR: f32 = 100.0;
/// Smoothing time constant in seconds; `update(dt)` consumes
/// `min(dt / SMOOTHING, 1.0)` of the remaining distance to the destination.
pub const SMOOTHING: f32 = 0.12;

/// Latitude clamp keeping the orbit away from the poles, in normalized
/// lat/long units where 0 and 1 are the gimbal singularities.
const LAT_MIN: f32 = 0.02;
const LAT_MAX: f32 = 0.98;

/// A point that exponentially chases a destination.
#[derive(Debug, Clone, Copy)]
pub struct Interp3 {
    pub curr: Vec3,
    pub dest: Vec3,
}

impl Interp3 {
    fn pinned(v: Vec3) -> Self {
        Self { curr: v, dest: v }
    }
}

/// Smoothed orbit camera.
///
/// Input handlers write to the `dest` halves and the orbit accumulator;
/// `update` moves the `curr` halves toward them with exponential smoothing,
/// so noisy per-frame input deltas never reach the rendered view directly.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Interp3,
    pub position: Interp3,
    orbit: Vec2,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            target: Interp3::pinned(Vec3::ZERO),
            position: Interp3::pinned(Vec3::new(0.0, 0.0, -3.0)),
            orbit: Vec2::ZERO,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Accumulates an orbit request. Nothing moves until `update` drains
    /// the accumulator.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.orbit += Vec2::new(dx, dy);
    }

    /// Moves the destination position along the target-to-position axis by
    /// `dz` times the current distance; negative `dz` approaches the target,
    /// positive retreats. A move that would land outside
    /// [DOLLY_NEAR, DOLLY_FAR] is rejected, except when it is heading back
    /// toward the legal range from outside a bound.
    pub fn dolly(&mut self, dz: f32) {
        let to_pos = self.position.dest - self.target.dest;
        let len = to_pos.length();
        let dir = to_pos / (len + f32::MIN_POSITIVE);

        let delta = len * dz;
        let new_len = len + delta;
        if (new_len > DOLLY_NEAR || dz > 0.0) && (new_len < DOLLY_FAR || dz < 0.0) {
            self.position.dest += dir * delta;
        }
    }

    /// Drains `amount` of the pending orbit accumulator and rotates the
    /// camera around the target by the drained angles.
    fn consume_orbit(&mut self, amount: f32) {
        let consumed = self.orbit * amount;
        self.orbit -= consumed;

        let to_pos = self.position.curr - self.target.curr;
        let len = to_pos.length();
        let dir = to_pos / (len + f32::MIN_POSITIVE);

        let (mut lng, mut lat) = to_lat_long(dir);
        lng += consumed.x;
        lat -= consumed.y;
        lat = lat.clamp(LAT_MIN, LAT_MAX);

        let diff = (from_lat_long(lng, lat) - dir) * len;

        // Shifting dest along with curr turns an orbit into a springy pan
        // instead of a snap back to the pre-orbit destination.
        self.position.curr += diff;
        self.position.dest += diff;
    }

    /// Per-frame step: drains the orbit accumulator and interpolates both
    /// current points toward their destinations.
    pub fn update(&mut self, dt: f32) {
        let amount = (dt / SMOOTHING).min(1.0);

        self.consume_orbit(amount);

        self.target.curr = self.target.curr.lerp(self.target.dest, amount);
        self.position.curr = self.position.curr.lerp(self.position.dest, amount);
    }

    pub fn eye(&self) -> Vec3 {
        self.position.curr
    }

    /// Right-handed look-at from the current position toward the current
    /// target, +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position.curr, self.target.curr, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
