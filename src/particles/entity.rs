use glam::{vec3, Vec3};
use rand::Rng;

use crate::entity::Emitter;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Particle {
    /// Point the particle was last emitted from.
    pub origin: Vec3,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub force: Vec3,
    pub mass: f32,
    /// Remaining lifetime in seconds.
    pub life: f32,
    pub scale: f32,
}

impl Particle {
    pub const MASS: f32 = 0.001;

    pub fn emit(rng: &mut impl Rng, emitter: &Emitter) -> Self {
        let mut particle = Self {
            acceleration: Vec3::ZERO,
            force: Vec3::ZERO,
            mass: Self::MASS,
            ..Default::default()
        };
        particle.respawn(rng, emitter);
        particle
    }

    /// Resets the kinematic and lifetime state in place. Mass, acceleration and
    /// force are left as they are; the next integration step recomputes them.
    pub fn respawn(&mut self, rng: &mut impl Rng, emitter: &Emitter) {
        let spread = emitter.spread.abs();
        let lateral = emitter.lateral_speed.abs();

        self.origin = emitter.center
            + vec3(
                rng.gen_range(-spread..=spread),
                0.0,
                rng.gen_range(-spread..=spread),
            );
        self.position = self.origin;
        self.velocity = vec3(
            rng.gen_range(-lateral..=lateral),
            sample(rng, emitter.upward_speed),
            rng.gen_range(-lateral..=lateral),
        );
        self.life = sample(rng, emitter.lifetime);
        self.scale = sample(rng, emitter.scale);
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    pub fn integrate(&mut self, gravity: Vec3, dt: f32) {
        self.force = self.mass * gravity;
        self.acceleration = self.force / self.mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }
}

fn sample(rng: &mut impl Rng, (a, b): (f32, f32)) -> f32 {
    rng.gen_range(a.min(b)..=a.max(b))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn assert_fresh(particle: &Particle, emitter: &Emitter) {
        assert_eq!(particle.position, particle.origin);
        assert_eq!(particle.origin.y, emitter.center.y);
        assert!((particle.origin.x - emitter.center.x).abs() <= 1.0);
        assert!((particle.origin.z - emitter.center.z).abs() <= 1.0);
        assert!((-0.6..=0.6).contains(&particle.velocity.x));
        assert!((1.5..=3.0).contains(&particle.velocity.y));
        assert!((-0.6..=0.6).contains(&particle.velocity.z));
        assert!((4.0..=6.0).contains(&particle.life));
        assert!((0.4..=0.6).contains(&particle.scale));
    }

    #[test]
    fn emit_is_within_profile() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let emitter = Emitter::at(vec3(3.0, 10.0, -2.0));
        for _ in 0..500 {
            let particle = Particle::emit(&mut rng, &emitter);
            assert_fresh(&particle, &emitter);
            assert_eq!(particle.mass, Particle::MASS);
            assert_eq!(particle.acceleration, Vec3::ZERO);
            assert_eq!(particle.force, Vec3::ZERO);
        }
    }

    #[test]
    fn respawn_keeps_mass_and_forces() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let emitter = Emitter::default();
        let mut particle = Particle {
            position: vec3(50.0, 50.0, 50.0),
            velocity: vec3(9.0, 9.0, 9.0),
            acceleration: vec3(0.0, -0.1, 0.0),
            force: vec3(0.0, -0.0001, 0.0),
            mass: 0.001,
            life: -0.5,
            scale: 3.0,
            ..Default::default()
        };

        particle.respawn(&mut rng, &emitter);

        assert_fresh(&particle, &emitter);
        assert_eq!(particle.acceleration, vec3(0.0, -0.1, 0.0));
        assert_eq!(particle.force, vec3(0.0, -0.0001, 0.0));
        assert_eq!(particle.mass, 0.001);
    }

    #[test]
    fn reversed_ranges_are_accepted() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let emitter = Emitter {
            lifetime: (6.0, 4.0),
            ..Default::default()
        };
        let particle = Particle::emit(&mut rng, &emitter);
        assert!((4.0..=6.0).contains(&particle.life));
    }

    #[test]
    fn integrate_is_semi_implicit() {
        let mut particle = Particle {
            velocity: vec3(1.0, 0.0, 0.0),
            mass: 0.001,
            ..Default::default()
        };

        particle.integrate(vec3(0.0, -2.0, 0.0), 0.5);

        assert!(particle.acceleration.abs_diff_eq(vec3(0.0, -2.0, 0.0), 1e-4));
        assert!(particle.force.abs_diff_eq(vec3(0.0, -0.002, 0.0), 1e-7));
        assert!(particle.velocity.abs_diff_eq(vec3(1.0, -1.0, 0.0), 1e-4));
        assert!(particle.position.abs_diff_eq(vec3(0.5, -0.5, 0.0), 1e-4));
    }
}
