use std::{fs, path::Path, time::Instant};

use anyhow::{Context, Result};
use glam::{vec3, Vec3};
use log::{debug, info};
use steam_plume::{instance, Emitter, Instance, Particle, Particles};

#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta
    }

    pub fn last_frame(&self) -> Instant {
        self.last_frame
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub mean_position: Vec3,
    pub max_scale: f32,
    pub min_life: f32,
    pub max_life: f32,
}

impl Stats {
    pub fn new(particles: &[Particle]) -> Option<Self> {
        let first = particles.first()?;
        let init = Self {
            count: 0,
            mean_position: Vec3::ZERO,
            max_scale: first.scale,
            min_life: first.life,
            max_life: first.life,
        };

        let mut stats = particles.iter().fold(init, |stats, particle| Self {
            count: stats.count + 1,
            mean_position: stats.mean_position + particle.position,
            max_scale: stats.max_scale.max(particle.scale),
            min_life: stats.min_life.min(particle.life),
            max_life: stats.max_life.max(particle.life),
        });
        stats.mean_position /= stats.count as f32;

        Some(stats)
    }
}

pub struct App {
    particles: Particles,
    clock: FrameClock,
    instances: Vec<Instance>,
    elapsed: f32,
    float_after: f32,
    next_report: f32,
    respawned: usize,
}

impl App {
    pub const PARTICLE_COUNT: usize = 1000;
    const REPORT_INTERVAL: f32 = 1.0;

    /// `float_after` is the simulated time after which gravity is switched off.
    pub fn new(float_after: f32) -> Self {
        let particles =
            Particles::from_emitter(Self::PARTICLE_COUNT, Emitter::at(vec3(0.0, -1.5, 0.0)));
        info!("{:#?}", particles.emitter());

        Self {
            instances: Vec::with_capacity(particles.len()),
            particles,
            clock: FrameClock::new(),
            elapsed: 0.0,
            float_after,
            next_report: Self::REPORT_INTERVAL,
            respawned: 0,
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn update(&mut self) {
        let dt = self.clock.tick();
        self.step(dt);
    }

    fn step(&mut self, dt: f32) {
        if self.elapsed < self.float_after && self.elapsed + dt >= self.float_after {
            self.particles.set_gravity(Vec3::ZERO);
            info!("Gravity switched off after {:.2}s", self.elapsed);
        }

        self.respawned += self.particles.advance(dt);
        self.elapsed += dt;
        self.particles.write_instances(&mut self.instances);
        debug!("dt: {:.4}", dt);

        if self.elapsed >= self.next_report {
            self.report();
            self.next_report += Self::REPORT_INTERVAL;
            self.respawned = 0;
        }
    }

    fn report(&self) {
        match Stats::new(self.particles.particles()) {
            Some(stats) => info!(
                "t={:.1}s particles={} mean_height={:.3} max_scale={:.3} life=[{:.2}, {:.2}] respawned={}",
                self.elapsed,
                stats.count,
                stats.mean_position.y,
                stats.max_scale,
                stats.min_life,
                stats.max_life,
                self.respawned,
            ),
            None => info!("t={:.1}s no particles", self.elapsed),
        }
    }

    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        fs::write(path, instance::as_bytes(&self.instances))
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        info!(
            "Wrote {} instances to {}",
            self.instances.len(),
            path.display()
        );
        Ok(())
    }
}
