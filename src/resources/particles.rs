//! Named particle definitions.
//!
//! A room looks particles up by name when emitting. Definitions come from code
//! ([`ParticleDefs::insert`]) or from `[particle.<name>]` sections of the room
//! configuration file.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDef {
    pub sprite: String,
    pub width: f32,
    pub height: f32,
}

impl ParticleDef {
    pub fn new(sprite: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            sprite: sprite.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleDefs {
    defs: FxHashMap<String, ParticleDef>,
}

impl ParticleDefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, name: impl Into<String>, def: ParticleDef) {
        self.defs.insert(name.into(), def);
    }

    pub fn get(&self, name: &str) -> Option<&ParticleDef> {
        self.defs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Copy every definition from `other`, replacing same-named ones.
    pub fn extend(&mut self, other: &ParticleDefs) {
        for (name, def) in &other.defs {
            self.defs.insert(name.clone(), def.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParticleDef)> {
        self.defs.iter().map(|(k, v)| (k.as_str(), v))
    }
}
