//! Prefab registry: type name to object constructor.
//!
//! Level documents name each object by type. On import the room looks that
//! name up here and calls the constructor with a private copy of the saved
//! state and the saved parameters. A name that is not registered is a lookup
//! miss, never a panic.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::components::objectstate::ObjectState;
use crate::objects::GameObject;

/// Constructor stored in a [`PrefabRegistry`].
pub type PrefabFactory =
    Box<dyn Fn(ObjectState, Option<Value>) -> Box<dyn GameObject> + Send + Sync>;

#[derive(Default)]
pub struct PrefabRegistry {
    factories: FxHashMap<String, PrefabFactory>,
}

impl PrefabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the constructor for `type_name`.
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F)
    where
        F: Fn(ObjectState, Option<Value>) -> Box<dyn GameObject> + Send + Sync + 'static,
    {
        self.factories.insert(type_name.into(), Box::new(factory));
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Build an object of `type_name`, or `None` when the name is unknown.
    pub fn instantiate(
        &self,
        type_name: &str,
        state: ObjectState,
        parameters: Option<Value>,
    ) -> Option<Box<dyn GameObject>> {
        self.factories
            .get(type_name)
            .map(|factory| factory(state, parameters))
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
