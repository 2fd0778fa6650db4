//! Plain data carried by room objects.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangle and the strict overlap predicate
//! - [`objectstate`] – persisted per-object state (position, velocity, rotation, scaling)
//! - [`tags`] – tag set used by the inclusive/exclusive query policies
//! - [`ttl`] – tick-counted lifetime for self-expiring objects

pub mod boxcollider;
pub mod objectstate;
pub mod tags;
pub mod ttl;
