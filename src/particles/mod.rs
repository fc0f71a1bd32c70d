use std::{slice, time::SystemTime};

use glam::Vec3;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::{entity::Emitter, instance::Instance};

pub mod entity;

pub use entity::Particle;

/// A fixed-size pool of particles driven by a constant force field.
///
/// Expired particles are re-emitted in their own slot, so the index of a
/// particle stays valid for the whole lifetime of the system.
#[derive(Debug, Clone)]
pub struct Particles {
    particles: Vec<Particle>,
    emitter: Emitter,
    rng: Pcg64Mcg,
}

impl Particles {
    pub fn new(count: usize, origin: Vec3) -> Self {
        Self::from_emitter(count, Emitter::at(origin))
    }

    /// Builds a system from `emitter` with a generator seeded from the clock.
    pub fn from_emitter(count: usize, emitter: Emitter) -> Self {
        let rand_seed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        info!("Seeded RNG with {}", rand_seed);

        Self::with_emitter(count, emitter, Pcg64Mcg::seed_from_u64(rand_seed))
    }

    pub fn from_seed(count: usize, origin: Vec3, seed: u64) -> Self {
        Self::with_emitter(count, Emitter::at(origin), Pcg64Mcg::seed_from_u64(seed))
    }

    pub fn with_emitter(count: usize, emitter: Emitter, mut rng: Pcg64Mcg) -> Self {
        let emitter = emitter.normalized();
        let particles = (0..count)
            .map(|_| Particle::emit(&mut rng, &emitter))
            .collect::<Vec<_>>();
        debug!("Emitted {} particles from {:?}", count, emitter.center);

        Self {
            particles,
            emitter,
            rng,
        }
    }

    pub fn gravity(&self) -> Vec3 {
        self.emitter.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.emitter.gravity = gravity;
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn emitter_center(&self) -> Vec3 {
        self.emitter.center
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particle states. The pool itself cannot be resized.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Re-emits the particle at `index`. Returns `false` if there is no such slot.
    pub fn respawn(&mut self, index: usize) -> bool {
        match self.particles.get_mut(index) {
            Some(particle) => {
                particle.respawn(&mut self.rng, &self.emitter);
                true
            }
            None => false,
        }
    }

    /// Advances every particle by `dt` seconds and returns how many of them
    /// were re-emitted before integrating.
    pub fn advance(&mut self, dt: f32) -> usize {
        let Self {
            particles,
            emitter,
            rng,
        } = self;
        let gravity = emitter.gravity;
        let mut respawned = 0;

        for (i, particle) in particles.iter_mut().enumerate() {
            if particle.is_expired() {
                trace!("Respawning particle {}", i);
                particle.respawn(rng, emitter);
                respawned += 1;
            }

            particle.integrate(gravity, dt);
            particle.life -= dt;
            particle.scale += dt * emitter.growth_rate;
        }

        respawned
    }

    /// Refills `instances` with the render state of every particle, in order.
    pub fn write_instances(&self, instances: &mut Vec<Instance>) {
        instances.clear();
        instances.extend(self.particles.iter().map(Instance::from));
    }
}

impl<'a> IntoIterator for &'a Particles {
    type Item = &'a Particle;
    type IntoIter = slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
