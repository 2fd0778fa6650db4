//! Event types and observers used by the room runtime.
//!
//! Submodules:
//! - [`debug`] – messages streamed to an attached debug overlay
//! - [`frame`] – ECS event triggered after every simulation frame
pub mod debug;
pub mod frame;
