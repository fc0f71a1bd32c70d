//! Particle simulation for smoke and steam effects.
//!
//! A [`Particles`] pool owns a fixed number of particles emitted around an
//! [`Emitter`]. Every call to [`Particles::advance`] integrates them under a
//! constant gravity field and re-emits the ones whose lifetime ran out.

pub mod entity;
pub mod instance;
pub mod particles;

pub use entity::Emitter;
pub use instance::Instance;
pub use particles::{Particle, Particles};
