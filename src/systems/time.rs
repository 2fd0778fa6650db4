//! Clock step for a world hosting a room.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the [`WorldTime`] resource by one simulation step of `dt` seconds.
///
/// Call once before running the schedule that holds
/// [`room_tick_system`](crate::systems::room::room_tick_system). Worlds
/// without a clock are left untouched.
pub fn update_world_time(world: &mut World, dt: f32) {
    if let Some(mut time) = world.get_resource_mut::<WorldTime>() {
        time.advance(dt);
    }
}
