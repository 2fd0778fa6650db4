//! Stock object kinds and the prefab registry that builds them.
//!
//! - `Wall` – static, solid
//! - `Walker` – moves by its velocity and turns around when blocked
//! - `Crate` – solid and pulled down by gravity
//! - `Gate` – composite: spawns two `GatePost` descendants `gap` units apart
//!
//! Sizes come from the `parameters` of a level entry (`width`, `height`,
//! `gap`); missing values fall back to the defaults below.

use serde_json::Value;

use crate::components::objectstate::{ObjectState, Vector};
use crate::objects::{GameObject, Lifecycle, ObjectCore};
use crate::resources::prefabs::PrefabRegistry;

const DEFAULT_WALL_SIZE: f32 = 16.0;
const DEFAULT_WALKER_WIDTH: f32 = 8.0;
const DEFAULT_WALKER_HEIGHT: f32 = 16.0;
const DEFAULT_CRATE_SIZE: f32 = 16.0;
const DEFAULT_GATE_GAP: f32 = 32.0;
const DEFAULT_GATE_HEIGHT: f32 = 48.0;
const GATE_POST_WIDTH: f32 = 8.0;

fn param_f32(params: &Option<Value>, key: &str, default: f32) -> f32 {
    params
        .as_ref()
        .and_then(|p| p.get(key))
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
}

pub struct Wall {
    core: ObjectCore,
}

impl Wall {
    pub fn new(state: ObjectState, params: Option<Value>) -> Self {
        let width = param_f32(&params, "width", DEFAULT_WALL_SIZE);
        let height = param_f32(&params, "height", DEFAULT_WALL_SIZE);
        let core = ObjectCore::new(state, width, height)
            .with_collision(true)
            .with_tick_state(false)
            .with_tags(["wall", "solid"])
            .with_params(params);
        Self { core }
    }
}

impl GameObject for Wall {
    fn kind(&self) -> &str {
        "Wall"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }
}

pub struct Walker {
    core: ObjectCore,
    last_position: Option<Vector>,
}

impl Walker {
    pub fn new(state: ObjectState, params: Option<Value>) -> Self {
        let width = param_f32(&params, "width", DEFAULT_WALKER_WIDTH);
        let height = param_f32(&params, "height", DEFAULT_WALKER_HEIGHT);
        let core = ObjectCore::new(state, width, height)
            .with_collision(true)
            .with_tags(["walker", "solid"])
            .with_params(params);
        Self {
            core,
            last_position: None,
        }
    }
}

impl GameObject for Walker {
    fn kind(&self) -> &str {
        "Walker"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }

    /// Turn around after a frame in which horizontal movement was blocked.
    fn update(&mut self, _time: f32) -> Lifecycle {
        let state = &mut self.core.state;
        let blocked = matches!(self.last_position, Some(last) if last.x == state.position.x);
        if blocked && state.velocity.x != 0.0 {
            state.velocity.x = -state.velocity.x;
        }
        self.last_position = Some(state.position);
        Lifecycle::Alive
    }
}

pub struct Crate {
    core: ObjectCore,
}

impl Crate {
    pub fn new(state: ObjectState, params: Option<Value>) -> Self {
        let size = param_f32(&params, "size", DEFAULT_CRATE_SIZE);
        let core = ObjectCore::new(state, size, size)
            .with_collision(true)
            .with_gravity(true)
            .with_tags(["crate", "solid"])
            .with_params(params);
        Self { core }
    }
}

impl GameObject for Crate {
    fn kind(&self) -> &str {
        "Crate"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }
}

/// One side of a [`Gate`]. Only ever created by its gate.
pub struct GatePost {
    core: ObjectCore,
}

impl GameObject for GatePost {
    fn kind(&self) -> &str {
        "GatePost"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }
}

pub struct Gate {
    core: ObjectCore,
    posts: Vec<Box<dyn GameObject>>,
}

impl Gate {
    pub fn new(state: ObjectState, params: Option<Value>) -> Self {
        let gap = param_f32(&params, "gap", DEFAULT_GATE_GAP);
        let height = param_f32(&params, "height", DEFAULT_GATE_HEIGHT);
        let origin = state.position;
        let mut core = ObjectCore::new(state, gap + 2.0 * GATE_POST_WIDTH, height)
            .with_tick_state(false)
            .with_tags(["gate"])
            .with_params(params);

        let mut posts: Vec<Box<dyn GameObject>> = Vec::with_capacity(2);
        for x in [origin.x, origin.x + GATE_POST_WIDTH + gap] {
            let mut post_core = ObjectCore::new(ObjectState::at(x, origin.y), GATE_POST_WIDTH, height)
                .with_collision(true)
                .with_tick_state(false)
                .with_tags(["gatepost", "solid"]);
            core.adopt(&mut post_core);
            posts.push(Box::new(GatePost { core: post_core }));
        }
        Self { core, posts }
    }
}

impl GameObject for Gate {
    fn kind(&self) -> &str {
        "Gate"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }
    fn take_descendants(&mut self) -> Vec<Box<dyn GameObject>> {
        std::mem::take(&mut self.posts)
    }
}

/// Registry with every stock kind.
pub fn default_prefabs() -> PrefabRegistry {
    let mut prefabs = PrefabRegistry::new();
    prefabs.register("Wall", |state, params| Box::new(Wall::new(state, params)));
    prefabs.register("Walker", |state, params| Box::new(Walker::new(state, params)));
    prefabs.register("Crate", |state, params| Box::new(Crate::new(state, params)));
    prefabs.register("Gate", |state, params| Box::new(Gate::new(state, params)));
    prefabs
}
