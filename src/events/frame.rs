//! Frame notification for camera/HUD collaborators living in the ECS world.
//!
//! [`room_tick_system`](crate::systems::room::room_tick_system) triggers a
//! [`FrameElapsedEvent`] after the room has finished a simulation frame.
//! Observers see the room only after particles, text nodes and primary
//! objects have all been advanced.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<FrameElapsedEvent>| {
//!     hud.redraw(trigger.event().frame);
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FrameElapsedEvent {
    /// Frames completed by the room so far, including this one.
    pub frame: u64,
    /// Time value handed to the room's tick.
    pub time: f32,
}

/// Observer that traces every completed frame.
pub fn frame_log_observer(trigger: On<FrameElapsedEvent>) {
    let event = trigger.event();
    trace!("frame {} elapsed at t={:.3}", event.frame, event.time);
}
