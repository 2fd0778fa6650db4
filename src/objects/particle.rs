//! Decorative particle.
//!
//! Particles live in the room's particle list, never collide, are never
//! exported and expire on their own after a fixed number of ticks.

use std::sync::Arc;

use crate::components::objectstate::{ObjectState, Vector};
use crate::components::ttl::Ttl;
use crate::objects::{GameObject, Lifecycle, LoadFuture, ObjectCore};
use crate::resources::assets::{AssetError, AssetSource, ImageInfo};
use crate::resources::particles::ParticleDef;

pub const PARTICLE_KIND: &str = "Particle";

pub struct Particle {
    core: ObjectCore,
    pub def: ParticleDef,
    pub ttl: Ttl,
    pub sprite: Option<ImageInfo>,
}

impl Particle {
    /// Particle at `position` with zero velocity and rotation and unit scaling.
    pub fn new(def: ParticleDef, position: Vector, lifetime: u32) -> Self {
        let state = ObjectState {
            position,
            ..ObjectState::default()
        };
        let core = ObjectCore::new(state, def.width, def.height)
            .with_collision(false)
            .with_save_to_file(false)
            .with_tick_state(true)
            .with_tags(["particle"]);
        Self {
            core,
            def,
            ttl: Ttl::new(lifetime),
            sprite: None,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.ttl.remaining
    }
}

impl GameObject for Particle {
    fn kind(&self) -> &str {
        PARTICLE_KIND
    }

    fn core(&self) -> &ObjectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }

    fn load(&mut self, assets: &Arc<dyn AssetSource>) -> LoadFuture<'_> {
        let pending = assets.load_image(&self.def.sprite);
        Box::pin(async move {
            self.sprite = Some(pending.await?);
            Ok::<(), AssetError>(())
        })
    }

    fn update(&mut self, _time: f32) -> Lifecycle {
        if self.ttl.tick() {
            Lifecycle::Expired
        } else {
            Lifecycle::Alive
        }
    }
}
