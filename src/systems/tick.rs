//! The room's frame tick.
//!
//! # System Flow
//!
//! Each call to [`Room::tick`] runs, in this order:
//!
//! 1. every particle's update
//! 2. every text node's update
//! 3. for every primary object with `tick_state`: gravity, swept movement,
//!    then the object's own update
//! 4. every registered [`FrameListener`](crate::resources::room::FrameListener)
//!
//! Particles and text nodes therefore never see this frame's primary
//! movement. Objects whose update reports
//! [`Lifecycle::Expired`](crate::objects::Lifecycle) are removed (with their
//! descendants) once their list's pass is over, so no removal shifts an
//! index mid-pass.

use log::trace;

use crate::objects::{GameObject, Lifecycle, ObjectId};
use crate::resources::room::{ObjectList, Room};
use crate::systems::movement::{apply_gravity, velocity_collision_check};

/// Update every object of `list`; ids of those that expired.
fn update_all(list: &mut [Box<dyn GameObject>], time: f32) -> Vec<ObjectId> {
    let mut expired = Vec::new();
    for object in list.iter_mut() {
        if object.update(time) == Lifecycle::Expired {
            expired.push(object.id().to_string());
        }
    }
    expired
}

impl Room {
    pub fn tick(&mut self, time: f32) {
        let expired = update_all(&mut self.particles_arr, time);
        self.remove_expired(expired, ObjectList::Particles);

        let expired = update_all(&mut self.text_nodes, time);
        self.remove_expired(expired, ObjectList::TextNodes);

        let gravity = self.config.gravity;
        let max_fall_speed = self.config.max_fall_speed;
        let ticking: Vec<usize> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.core().tick_state)
            .map(|(i, _)| i)
            .collect();
        let mut expired = Vec::new();
        for index in ticking {
            apply_gravity(self.objects[index].as_mut(), gravity, max_fall_speed);
            velocity_collision_check(&mut self.objects, index);
            let object = &mut self.objects[index];
            if object.update(time) == Lifecycle::Expired {
                expired.push(object.id().to_string());
            }
        }
        self.remove_expired(expired, ObjectList::Objects);

        self.frame += 1;
        let frame = self.frame;
        for listener in self.frame_listeners.iter_mut() {
            listener.frame_elapsed(frame, time);
        }
        trace!("Room '{}': frame {} done", self.name, frame);
    }

    fn remove_expired(&mut self, expired: Vec<ObjectId>, list: ObjectList) {
        for id in expired {
            self.remove(&id, list);
        }
    }
}
