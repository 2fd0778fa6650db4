//! ECS glue for a room hosted as a resource.
//!
//! The room runs its own frame logic; this system only feeds it world time
//! and tells ECS observers that a frame went by.

use bevy_ecs::prelude::*;

use crate::events::frame::FrameElapsedEvent;
use crate::resources::room::Room;
use crate::resources::worldtime::WorldTime;

/// Tick the [`Room`] resource once and trigger [`FrameElapsedEvent`].
///
/// Rooms that have not finished loading are skipped.
pub fn room_tick_system(mut room: ResMut<Room>, time: Res<WorldTime>, mut commands: Commands) {
    if !room.is_ready() {
        return;
    }
    room.tick(time.elapsed);
    commands.trigger(FrameElapsedEvent {
        frame: room.frame(),
        time: time.elapsed,
    });
}
