//! roomsim library.
//!
//! The per-level simulation container of a 2D game runtime: a room owns the
//! live objects of a level, answers spatial queries over them, advances them
//! one frame at a time with collision-aware movement, runs decorative
//! particles, and round-trips its contents through a level document.
//!
//! - [`components`] – plain data (collision boxes, object state, tags, lifetimes)
//! - [`events`] – ECS frame event and debug overlay messages
//! - [`game`] – stock object kinds and their prefab registry
//! - [`objects`] – the `GameObject` trait, particles and text nodes
//! - [`resources`] – the room, its configuration and collaborators
//! - [`systems`] – queries, movement, emission, state round trip, frame tick

pub mod components;
pub mod events;
pub mod game;
pub mod objects;
pub mod resources;
pub mod systems;
