//! Room behaviour.
//!
//! Most modules here extend [`Room`](crate::resources::room::Room) with
//! another `impl` block; `room` and `time` are bevy_ecs systems.
//!
//! Submodules overview:
//! - [`movement`] – swept, per-axis collision-aware movement and gravity
//! - [`particleemitter`] – particle emission with spawn jitter
//! - [`query`] – box and point queries with tag inclusion/exclusion
//! - [`room`] – ECS system ticking a room resource
//! - [`stateconfig`] – level state export/import through the prefab registry
//! - [`tick`] – the ordered per-frame update
//! - [`time`] – world time bookkeeping

pub mod movement;
pub mod particleemitter;
pub mod query;
pub mod room;
pub mod stateconfig;
pub mod tick;
pub mod time;
