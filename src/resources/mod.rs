//! Room state and the collaborators it talks to.
//!
//! Submodules overview:
//! - [`assets`] – asset loading collaborator and its in-memory/file sources
//! - [`controls`] – keybinding collaborator and an in-memory binding table
//! - [`debugmode`] – debug probe streaming query boxes and list changes
//! - [`particles`] – named particle definitions
//! - [`prefabs`] – type-name keyed object constructors
//! - [`room`] – the room: object lists, registry operations, loading
//! - [`roomconfig`] – INI-backed simulation settings
//! - [`worldtime`] – elapsed/delta time shared with ECS systems

pub mod assets;
pub mod controls;
pub mod debugmode;
pub mod particles;
pub mod prefabs;
pub mod room;
pub mod roomconfig;
pub mod worldtime;
