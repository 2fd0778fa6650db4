//! Messages sent to a debug overlay over a `crossbeam-channel`.
//!
//! The room never waits on the receiver and ignores a disconnected one, so an
//! attached overlay can observe queries and list changes without influencing
//! them.

use crate::components::boxcollider::CollisionBox;

#[derive(Debug, Clone, PartialEq)]
pub enum DebugEvent {
    /// A spatial query was made with this box.
    QueryBox(CollisionBox),
    /// The primary object list changed; carries the new length.
    ObjectListChanged { count: usize },
}
