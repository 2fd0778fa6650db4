//! Particle emission.
//!
//! [`Room::emit_particle`] spawns one [`Particle`] into the particle list.
//! The spawn position is jittered once, uniformly per axis within
//! `[-pos_range, +pos_range]`, using the room's seeded generator. Particles
//! expire through their own update; nothing here tracks them afterwards.

use fastrand::Rng;
use log::warn;

use crate::components::objectstate::Vector;
use crate::objects::{GameObject, ObjectId};
use crate::objects::particle::Particle;
use crate::resources::room::{ObjectList, Room};

/// Sample a random f32 in the range [min, max].
/// If the range is smaller than EPSILON, returns min directly.
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// `pos` offset by up to `pos_range` on each axis.
pub fn jitter(rng: &mut Rng, pos: Vector, pos_range: f32) -> Vector {
    let r = pos_range.abs();
    Vector {
        x: pos.x + random_f32_range(rng, -r, r),
        y: pos.y + random_f32_range(rng, -r, r),
    }
}

impl Room {
    /// Emit the particle defined as `name` at `pos`. Returns the new particle's
    /// id, or `None` when no definition has that name.
    pub async fn emit_particle(
        &mut self,
        name: &str,
        pos: Vector,
        lifetime: u32,
        pos_range: f32,
    ) -> Option<ObjectId> {
        let Some(def) = self.particles.get(name).cloned() else {
            warn!("Room '{}': unknown particle '{}'", self.name, name);
            return None;
        };
        let position = jitter(&mut self.rng, pos, pos_range);
        let particle = Particle::new(def, position, lifetime);
        let id = particle.core().id.clone();
        self.add_item(Box::new(particle), ObjectList::Particles).await;
        Some(id)
    }
}
