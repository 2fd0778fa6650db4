//! Debug probe attached to a room.
//!
//! A room with a [`DebugProbe`] reports every query box and every change to
//! its primary object list. A room without one reports nothing. The probe
//! only sends; results are never affected by whether anyone is listening.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::components::boxcollider::CollisionBox;
use crate::events::debug::DebugEvent;

#[derive(Debug, Clone)]
pub struct DebugProbe {
    tx: Sender<DebugEvent>,
}

impl DebugProbe {
    /// Create a probe and the receiver an overlay drains.
    pub fn channel() -> (DebugProbe, Receiver<DebugEvent>) {
        let (tx, rx) = unbounded();
        (DebugProbe { tx }, rx)
    }

    pub fn query_box(&self, query: &CollisionBox) {
        let _ = self.tx.send(DebugEvent::QueryBox(*query));
    }

    pub fn object_list_changed(&self, count: usize) {
        let _ = self.tx.send(DebugEvent::ObjectListChanged { count });
    }
}
