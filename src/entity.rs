use glam::{const_vec3, Vec3};

/// Emission profile of a particle system.
///
/// The defaults describe a rising plume of steam: particles are scattered over
/// a 2x2 square around `center`, launched upwards with some lateral drift, and
/// grow slowly while they live.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Emitter {
    pub center: Vec3,
    pub gravity: Vec3,
    /// Half extent of the square on the XZ plane new particles are scattered over.
    pub spread: f32,
    /// Bound of the X and Z launch velocity, in either direction.
    pub lateral_speed: f32,
    pub upward_speed: (f32, f32),
    pub lifetime: (f32, f32),
    pub scale: (f32, f32),
    /// Scale gained per second of simulated time.
    pub growth_rate: f32,
}

impl Emitter {
    pub const DEFAULT_GRAVITY: Vec3 = const_vec3!([0.0, -0.1, 0.0]);

    pub fn at(center: Vec3) -> Self {
        Self {
            center,
            ..Default::default()
        }
    }

    /// Orders every range and replaces non-finite settings with the defaults.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let extent = |value: f32, default: f32| {
            if value.is_finite() {
                value.abs()
            } else {
                default
            }
        };
        let range = |(a, b): (f32, f32), default: (f32, f32)| {
            if a.is_finite() && b.is_finite() {
                (a.min(b), a.max(b))
            } else {
                default
            }
        };

        Self {
            spread: extent(self.spread, defaults.spread),
            lateral_speed: extent(self.lateral_speed, defaults.lateral_speed),
            upward_speed: range(self.upward_speed, defaults.upward_speed),
            lifetime: range(self.lifetime, defaults.lifetime),
            scale: range(self.scale, defaults.scale),
            ..self
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            gravity: Self::DEFAULT_GRAVITY,
            spread: 1.0,
            lateral_speed: 0.6,
            upward_speed: (1.5, 3.0),
            lifetime: (4.0, 6.0),
            scale: (0.4, 0.6),
            growth_rate: 0.15,
        }
    }
}
