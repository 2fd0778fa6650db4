//! Keybinding collaborator.
//!
//! Rooms register their bindings through a [`ControlRegistry`] and keep the
//! returned [`BindId`]s so they can release them on teardown. Key strings
//! follow the `<device><code><phase>` form (`mouse0down`, `KeyAdown`,
//! `KeyLup`); their grammar belongs to the registry, not the room.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindId(pub u32);

/// When a bound handler fires relative to the key's activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPhase {
    /// Once, on the frame the key activates.
    #[default]
    Once,
    /// Every `interval` frames while the key stays active.
    Repeat,
    /// Once, on release.
    Release,
}

pub type ControlHandler = Box<dyn FnMut() + Send + Sync>;

pub trait ControlRegistry {
    fn bind(
        &mut self,
        key: &str,
        phase: TriggerPhase,
        handler: ControlHandler,
        interval: u32,
    ) -> BindId;

    /// Release a binding. Unknown ids are ignored.
    fn unbind(&mut self, id: BindId);
}

pub struct Binding {
    pub key: String,
    pub phase: TriggerPhase,
    pub interval: u32,
    pub handler: ControlHandler,
}

/// Plain table of bindings, dispatched by key.
#[derive(Default)]
pub struct BindTable {
    next_id: u32,
    binds: FxHashMap<BindId, Binding>,
}

impl BindTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }

    /// Run every handler bound to `key`. Returns how many fired.
    pub fn dispatch(&mut self, key: &str) -> usize {
        let mut fired = 0;
        for bind in self.binds.values_mut().filter(|b| b.key == key) {
            (bind.handler)();
            fired += 1;
        }
        fired
    }
}

impl ControlRegistry for BindTable {
    fn bind(
        &mut self,
        key: &str,
        phase: TriggerPhase,
        handler: ControlHandler,
        interval: u32,
    ) -> BindId {
        let id = BindId(self.next_id);
        self.next_id += 1;
        self.binds.insert(
            id,
            Binding {
                key: key.to_string(),
                phase,
                interval: interval.max(1),
                handler,
            },
        );
        id
    }

    fn unbind(&mut self, id: BindId) {
        self.binds.remove(&id);
    }
}
