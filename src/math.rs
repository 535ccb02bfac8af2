//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Quat` inputs, making them straightforward to unit-test.

use bevy::prelude::{EulerRot, Quat};
use rand::Rng;

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero.
/// This linearly rescales to an arbitrary output range.
///
/// # Examples
/// ```
/// # use flower_area::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Folds a 64-bit seed into 32 bits, keeping entropy from both halves.
///
/// # Examples
/// ```
/// # use flower_area::math::fold_seed;
/// assert_eq!(fold_seed(7), 7);
/// assert_ne!(fold_seed(1 << 32), fold_seed(0));
/// ```
pub fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

/// Largest meaningful rotation limit, in degrees.
const MAX_ANGLE_LIMIT: f32 = 180.0;

/// Sanitizes a rotation limit: magnitude capped at 180°, non-finite pins the axis.
fn angle_limit(degrees: f32) -> f32 {
    if degrees.is_finite() {
        degrees.abs().min(MAX_ANGLE_LIMIT)
    } else {
        0.0
    }
}

/// Euler angles (degrees) of a randomized flower-plant orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantAngles {
    /// Tilt around X.
    pub x: f32,
    /// Spin around the vertical axis.
    pub y: f32,
    /// Tilt around Z.
    pub z: f32,
}

impl PlantAngles {
    /// Samples uniformly in `[-tilt, tilt]` on X/Z and `[-yaw, yaw]` on Y.
    ///
    /// Negative limits are treated as their absolute value and capped at
    /// 180°. A zero or non-finite limit pins that axis.
    pub fn sample(rng: &mut impl Rng, tilt_degrees: f32, yaw_degrees: f32) -> Self {
        let tilt = angle_limit(tilt_degrees);
        let yaw = angle_limit(yaw_degrees);
        Self {
            x: rng.random_range(-tilt..=tilt),
            y: rng.random_range(-yaw..=yaw),
            z: rng.random_range(-tilt..=tilt),
        }
    }

    /// Rotation applying Z, then X, then Y (so yaw is outermost).
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.y.to_radians(),
            self.x.to_radians(),
            self.z.to_radians(),
        )
    }
}

/// Random local rotation for a flower plant: subtle tilt, free spin.
pub fn random_plant_rotation(rng: &mut impl Rng, tilt_degrees: f32, yaw_degrees: f32) -> Quat {
    PlantAngles::sample(rng, tilt_degrees, yaw_degrees).to_quat()
}
