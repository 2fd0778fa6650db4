//! The room: per-level container of live objects.
//!
//! A [`Room`] owns three ordered object lists:
//!
//! - `objects` – primary objects; queried, moved, persisted
//! - `particles_arr` – particles emitted by the room
//! - `text_nodes` – text living in room space
//!
//! This module covers the registry side of the room (adding, removing and
//! looking up objects), asset loading and teardown. Queries, movement,
//! particle emission, state import/export and the frame tick live in
//! [`crate::systems`] as further `impl Room` blocks.
//!
//! # Loading
//!
//! Objects are loaded before they become part of a list. [`Room::stage`]
//! returns a future that owns the batch and loads it without borrowing the
//! room, so the room can keep ticking while a batch is in flight;
//! [`Room::commit`] appends the loaded batch. [`Room::add_items`] does both.
//! A failing object load is logged and the object is inserted anyway. A
//! failing background load fails [`Room::load`].

use std::future::Future;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::objects::{GameObject, ObjectId};
use crate::resources::assets::{AssetError, AssetSource, ImageInfo};
use crate::resources::controls::{BindId, ControlHandler, ControlRegistry, TriggerPhase};
use crate::resources::debugmode::DebugProbe;
use crate::resources::particles::{ParticleDef, ParticleDefs};
use crate::resources::roomconfig::RoomConfig;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("failed to load room background {url}: {source}")]
    Background {
        url: String,
        #[source]
        source: AssetError,
    },
    #[error("invalid state document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Which of the room's lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectList {
    #[default]
    Objects,
    Particles,
    TextNodes,
}

/// Background frame handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrame {
    pub sprite_sheet: String,
    pub left: f32,
    pub top: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
    pub opacity: f32,
}

/// Camera/HUD collaborator told about every finished frame.
pub trait FrameListener: Send + Sync {
    fn frame_elapsed(&mut self, frame: u64, time: f32);
}

/// A loaded batch waiting to be appended by [`Room::commit`].
pub struct StagedObjects {
    pub list: ObjectList,
    pub objects: Vec<Box<dyn GameObject>>,
}

#[derive(Resource)]
pub struct Room {
    pub name: Arc<str>,
    pub background_url: String,
    pub background: Option<ImageInfo>,
    /// Audio tracks loaded together with the background.
    pub audio_tracks: Vec<String>,
    pub objects: Vec<Box<dyn GameObject>>,
    pub particles: ParticleDefs,
    pub particles_arr: Vec<Box<dyn GameObject>>,
    pub text_nodes: Vec<Box<dyn GameObject>>,
    pub binds: Vec<BindId>,
    /// Whether the renderer should draw this room.
    pub render: bool,
    pub config: RoomConfig,
    pub(crate) assets: Arc<dyn AssetSource>,
    pub(crate) debug: Option<DebugProbe>,
    pub(crate) frame_listeners: Vec<Box<dyn FrameListener>>,
    pub(crate) rng: fastrand::Rng,
    pub(crate) frame: u64,
    ready: bool,
}

impl Room {
    pub fn new(
        name: impl AsRef<str>,
        background_url: impl Into<String>,
        assets: Arc<dyn AssetSource>,
    ) -> Self {
        Self::with_config(name, background_url, assets, RoomConfig::new())
    }

    pub fn with_config(
        name: impl AsRef<str>,
        background_url: impl Into<String>,
        assets: Arc<dyn AssetSource>,
        config: RoomConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut particles = ParticleDefs::new();
        particles.extend(&config.particles);
        Self {
            name: Arc::from(name.as_ref()),
            background_url: background_url.into(),
            background: None,
            audio_tracks: Vec::new(),
            objects: Vec::new(),
            particles,
            particles_arr: Vec::new(),
            text_nodes: Vec::new(),
            binds: Vec::new(),
            render: true,
            config,
            assets,
            debug: None,
            frame_listeners: Vec::new(),
            rng,
            frame: 0,
            ready: false,
        }
    }

    /// Attach a debug probe. Replaces any previous one.
    pub fn attach_debug(&mut self, probe: DebugProbe) {
        self.debug = Some(probe);
    }

    pub fn detach_debug(&mut self) -> Option<DebugProbe> {
        self.debug.take()
    }

    pub fn add_frame_listener(&mut self, listener: Box<dyn FrameListener>) {
        self.frame_listeners.push(listener);
    }

    /// Register a particle definition under `name`.
    pub fn register_particle(&mut self, name: impl Into<String>, def: ParticleDef) {
        self.particles.insert(name, def);
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Frames completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn list(&self, list: ObjectList) -> &[Box<dyn GameObject>] {
        match list {
            ObjectList::Objects => &self.objects,
            ObjectList::Particles => &self.particles_arr,
            ObjectList::TextNodes => &self.text_nodes,
        }
    }

    pub(crate) fn list_mut(&mut self, list: ObjectList) -> &mut Vec<Box<dyn GameObject>> {
        match list {
            ObjectList::Objects => &mut self.objects,
            ObjectList::Particles => &mut self.particles_arr,
            ObjectList::TextNodes => &mut self.text_nodes,
        }
    }

    /// Load the background and audio tracks, then mark the room ready.
    pub async fn load(&mut self) -> Result<(), RoomError> {
        let image = self
            .assets
            .load_image(&self.background_url)
            .await
            .map_err(|source| RoomError::Background {
                url: self.background_url.clone(),
                source,
            })?;
        self.background = Some(image);

        for track in &self.audio_tracks {
            if let Err(e) = self.assets.load_audio(track).await {
                warn!("Room '{}': audio track {} failed to load: {}", self.name, track, e);
            }
        }

        self.ready = true;
        info!(
            "Room '{}' loaded with {} objects",
            self.name,
            self.objects.len()
        );
        Ok(())
    }

    /// Background frame, once the background has loaded.
    pub fn render_frame(&self) -> Option<SpriteFrame> {
        self.background.as_ref().map(|bg| SpriteFrame {
            sprite_sheet: bg.path.clone(),
            left: 0.0,
            top: 0.0,
            sprite_width: bg.width as f32,
            sprite_height: bg.height as f32,
            opacity: 1.0,
        })
    }

    /// Load a batch of objects without borrowing the room.
    ///
    /// The returned future assigns the room to every object and awaits each
    /// object's load in order.
    pub fn stage(
        &self,
        objects: Vec<Box<dyn GameObject>>,
        list: ObjectList,
    ) -> impl Future<Output = StagedObjects> + Send + use<> {
        let assets = Arc::clone(&self.assets);
        let room = Arc::clone(&self.name);
        async move {
            let mut objects = objects;
            for object in objects.iter_mut() {
                object.core_mut().room = Some(Arc::clone(&room));
            }
            for object in objects.iter_mut() {
                if let Err(e) = object.load(&assets).await {
                    warn!(
                        "Room '{}': {} '{}' failed to load: {}",
                        room,
                        object.kind(),
                        object.id(),
                        e
                    );
                }
            }
            StagedObjects { list, objects }
        }
    }

    /// Append a staged batch to its list, preserving batch order.
    pub fn commit(&mut self, staged: StagedObjects) {
        let StagedObjects { list, objects } = staged;
        let count = objects.len();
        if cfg!(debug_assertions) {
            self.warn_duplicate_ids(&objects, list);
        }
        self.list_mut(list).extend(objects);
        debug!("Room '{}': committed {} objects to {:?}", self.name, count, list);
        if list == ObjectList::Objects {
            self.notify_object_list_changed();
        }
    }

    /// Add one object once it has loaded.
    pub async fn add_item(&mut self, object: Box<dyn GameObject>, list: ObjectList) {
        self.add_items(vec![object], list).await;
    }

    /// Add every object once all of them have loaded, in the given order.
    pub async fn add_items(&mut self, objects: Vec<Box<dyn GameObject>>, list: ObjectList) {
        let staged = self.stage(objects, list).await;
        self.commit(staged);
    }

    /// Remove every entry with `id` from `list`, then every descendant those
    /// entries spawned. Unknown ids are a no-op. Returns how many objects went.
    pub fn remove(&mut self, id: &str, list: ObjectList) -> usize {
        let mut pending: Vec<ObjectId> = vec![id.to_string()];
        let mut visited: FxHashSet<ObjectId> = FxHashSet::default();
        let mut removed = 0;

        while let Some(next) = pending.pop() {
            if !visited.insert(next.clone()) {
                continue;
            }
            let entries = self.list_mut(list);
            let mut a = 0;
            while a < entries.len() {
                if entries[a].id() == next {
                    let gone = entries.remove(a);
                    pending.extend(gone.core().spawned.iter().cloned());
                    removed += 1;
                } else {
                    a += 1;
                }
            }
        }

        if list == ObjectList::Objects {
            self.notify_object_list_changed();
        }
        removed
    }

    /// First primary object with `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&dyn GameObject> {
        self.objects
            .iter()
            .find(|o| o.id() == id)
            .map(|o| o.as_ref())
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Box<dyn GameObject>> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Every primary object carrying `tag`, in list order.
    pub fn get_by_tag(&self, tag: &str) -> Vec<&dyn GameObject> {
        self.objects
            .iter()
            .filter(|o| o.has_tag(tag))
            .map(|o| o.as_ref())
            .collect()
    }

    /// Register a key binding and remember it for teardown.
    pub fn bind_control(
        &mut self,
        controls: &mut dyn ControlRegistry,
        key: &str,
        phase: TriggerPhase,
        handler: ControlHandler,
        interval: u32,
    ) -> BindId {
        let id = controls.bind(key, phase, handler, interval);
        self.binds.push(id);
        id
    }

    /// Release bindings and discard every list. The room must be loaded
    /// again before reuse.
    pub fn teardown(&mut self, controls: Option<&mut dyn ControlRegistry>) {
        if let Some(controls) = controls {
            for id in self.binds.drain(..) {
                controls.unbind(id);
            }
        } else {
            self.binds.clear();
        }
        self.objects.clear();
        self.particles_arr.clear();
        self.text_nodes.clear();
        self.background = None;
        self.ready = false;
        self.notify_object_list_changed();
        info!("Room '{}' torn down", self.name);
    }

    fn notify_object_list_changed(&self) {
        if let Some(probe) = &self.debug {
            probe.object_list_changed(self.objects.len());
        }
    }

    fn warn_duplicate_ids(&self, incoming: &[Box<dyn GameObject>], list: ObjectList) {
        let mut seen: FxHashSet<&str> = self.list(list).iter().map(|o| o.id()).collect();
        for object in incoming {
            if !seen.insert(object.id()) {
                warn!(
                    "Room '{}': duplicate id '{}' in {:?}",
                    self.name,
                    object.id(),
                    list
                );
            }
        }
    }
}
