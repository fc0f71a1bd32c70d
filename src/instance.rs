use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::particles::Particle;

/// Per-instance data a renderer needs to draw a particle as a billboard.
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Instance {
    pub position: Vec3,
    pub scale: f32,
}

impl From<&Particle> for Instance {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position,
            scale: particle.scale,
        }
    }
}

pub fn as_bytes(instances: &[Instance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use glam::vec3;

    use super::*;

    #[test]
    fn instance_is_tightly_packed() {
        assert_eq!(size_of::<Instance>(), 16);
        let instances = [Instance::default(); 3];
        assert_eq!(as_bytes(&instances).len(), 48);
    }

    #[test]
    fn bytes_follow_field_order() {
        let instances = [Instance {
            position: vec3(1.0, 2.0, 3.0),
            scale: 0.5,
        }];
        let floats: &[f32] = bytemuck::cast_slice(as_bytes(&instances));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5]);
    }
}
