//! Room objects.
//!
//! Everything a room simulates implements [`GameObject`]. The trait is
//! object-safe so rooms hold heterogeneous `Box<dyn GameObject>` lists, and
//! every implementor embeds an [`ObjectCore`] carrying the fields the room
//! itself reads: identity, tags, state, collision participation, parent link
//! and persistence flags.
//!
//! # Composite objects
//!
//! A composite object builds its descendants when it is constructed, records
//! their ids in [`ObjectCore::spawned`] and hands the boxed descendants over
//! through [`GameObject::take_descendants`]. Each descendant points back at
//! its parent through [`ObjectCore::parent`], an id only: the room never
//! follows that link to destroy anything. Destruction flows the other way,
//! from a removed parent to its `spawned` ids.
//!
//! Submodules:
//! - [`particle`] – short-lived decorative object emitted by the room
//! - [`textnode`] – text placed in room space

pub mod particle;
pub mod textnode;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_lite::future;
use serde_json::Value;
use smallvec::SmallVec;

use crate::components::boxcollider::CollisionBox;
use crate::components::objectstate::ObjectState;
use crate::components::tags::Tags;
use crate::resources::assets::{AssetError, AssetSource};

/// Opaque object identifier. Unique within a room list by convention only.
pub type ObjectId = String;

/// Future returned by [`GameObject::load`].
pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = Result<(), AssetError>> + Send + 'a>>;

/// Result of a per-tick update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Alive,
    /// The object is done; the room drops it after the current pass.
    Expired,
}

/// Generate a fresh random id (16 lowercase hex digits).
pub fn generate_id() -> ObjectId {
    format!("{:016x}", fastrand::u64(..))
}

/// Fields shared by every room object.
#[derive(Debug, Clone)]
pub struct ObjectCore {
    pub id: ObjectId,
    pub tags: Tags,
    pub state: ObjectState,
    /// Participates in collision-bearing queries and blocks movement.
    pub collision: bool,
    /// Hitbox width at scaling 1.
    pub width: f32,
    /// Hitbox height at scaling 1.
    pub height: f32,
    /// Set on descendants of a composite object.
    pub parent: Option<ObjectId>,
    /// Ids of descendants this object created and owns.
    pub spawned: SmallVec<[ObjectId; 4]>,
    /// Include this object when the room exports its state.
    pub save_to_file: bool,
    /// Construction parameters, written back on export.
    pub params: Option<Value>,
    /// Moved and updated by the room every frame.
    pub tick_state: bool,
    /// Pulled down by the room's gravity every frame.
    pub gravity: bool,
    /// Name of the room the object was added to.
    pub room: Option<Arc<str>>,
}

impl ObjectCore {
    pub fn new(state: ObjectState, width: f32, height: f32) -> Self {
        Self {
            id: generate_id(),
            tags: Tags::default(),
            state,
            collision: false,
            width,
            height,
            parent: None,
            spawned: SmallVec::new(),
            save_to_file: true,
            params: None,
            tick_state: true,
            gravity: false,
            room: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ObjectId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Tags::new(tags);
        self
    }

    pub fn with_collision(mut self, collision: bool) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_tick_state(mut self, tick_state: bool) -> Self {
        self.tick_state = tick_state;
        self
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_save_to_file(mut self, save_to_file: bool) -> Self {
        self.save_to_file = save_to_file;
        self
    }

    pub fn with_params(mut self, params: Option<Value>) -> Self {
        self.params = params;
        self
    }

    /// Hitbox in world space: position plus scaled size.
    pub fn hitbox(&self) -> CollisionBox {
        CollisionBox::new(
            self.state.position.x,
            self.state.position.y,
            self.width * self.state.scaling.width,
            self.height * self.state.scaling.height,
        )
    }

    /// Mark `child` as a descendant of this object.
    pub fn adopt(&mut self, child: &mut ObjectCore) {
        child.parent = Some(self.id.clone());
        if !self.spawned.contains(&child.id) {
            self.spawned.push(child.id.clone());
        }
    }
}

pub trait GameObject: Send + Sync {
    /// Concrete kind name, used as `type` when exporting.
    fn kind(&self) -> &str;

    fn core(&self) -> &ObjectCore;

    fn core_mut(&mut self) -> &mut ObjectCore;

    /// Load the object's own assets. Failures are logged by the room and the
    /// object is inserted regardless.
    fn load(&mut self, _assets: &Arc<dyn AssetSource>) -> LoadFuture<'_> {
        Box::pin(future::ready(Ok(())))
    }

    /// Per-tick behaviour unrelated to movement (animation, timers, AI).
    fn update(&mut self, _time: f32) -> Lifecycle {
        Lifecycle::Alive
    }

    fn collision_box(&self) -> CollisionBox {
        self.core().hitbox()
    }

    /// Overlap predicate used by every spatial query.
    fn collides_with_box(&self, query: &CollisionBox) -> bool {
        self.collision_box().overlaps(query)
    }

    /// Hand over descendants built at construction. Called once, on import.
    fn take_descendants(&mut self) -> Vec<Box<dyn GameObject>> {
        Vec::new()
    }

    fn id(&self) -> &str {
        &self.core().id
    }

    fn has_tag(&self, tag: &str) -> bool {
        self.core().tags.contains(tag)
    }
}

/// The object followed by all of its descendants, depth first.
pub fn combined_objects(mut object: Box<dyn GameObject>) -> Vec<Box<dyn GameObject>> {
    let descendants = object.take_descendants();
    let mut out = vec![object];
    for child in descendants {
        out.extend(combined_objects(child));
    }
    out
}
