//! Level state export and import.
//!
//! The persisted shape is
//!
//! ```json
//! { "objects": [ { "type": "Wall", "state": { ... }, "parameters": ... } ] }
//! ```
//!
//! Export walks the primary list in order and writes every object that is
//! marked `save_to_file` and has no parent. Descendants of composite objects
//! are left out: their parent's prefab rebuilds them on import.
//!
//! Import looks each `type` up in a [`PrefabRegistry`]. Unknown types are
//! logged and skipped; the rest of the document still loads. Each known entry
//! is added together with its descendants as one batch.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::components::objectstate::ObjectState;
use crate::objects::combined_objects;
use crate::resources::assets::AssetSource;
use crate::resources::prefabs::PrefabRegistry;
use crate::resources::room::{ObjectList, Room, RoomError};
use crate::resources::roomconfig::RoomConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStateConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub state: ObjectState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default)]
    pub objects: Vec<ObjectStateConfig>,
}

impl StateConfig {
    pub fn from_json(text: &str) -> Result<Self, RoomError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, RoomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Outcome of [`Room::import_state_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Document entries that were instantiated.
    pub imported: usize,
    /// Objects added, descendants included.
    pub added: usize,
    /// Types of the entries that were skipped.
    pub skipped: Vec<String>,
}

impl Room {
    /// Build a room and import `config` into it. The room still has to be
    /// [loaded](Room::load) before use.
    pub async fn from_state_config(
        name: impl AsRef<str>,
        background_url: impl Into<String>,
        assets: Arc<dyn AssetSource>,
        room_config: RoomConfig,
        config: &StateConfig,
        prefabs: &PrefabRegistry,
    ) -> (Room, ImportReport) {
        let mut room = Room::with_config(name, background_url, assets, room_config);
        let report = room.import_state_config(config, prefabs).await;
        (room, report)
    }

    pub fn export_state_config(&self) -> StateConfig {
        let objects = self
            .objects
            .iter()
            .filter(|o| o.core().save_to_file && o.core().parent.is_none())
            .map(|o| ObjectStateConfig {
                kind: o.kind().to_string(),
                state: o.core().state.clone(),
                parameters: o.core().params.clone(),
            })
            .collect::<Vec<_>>();
        debug!(
            "Room '{}': exported {} of {} objects",
            self.name,
            objects.len(),
            self.objects.len()
        );
        StateConfig { objects }
    }

    /// Instantiate a single document entry and add it with its descendants.
    /// Returns how many objects were added, or `None` for an unknown type.
    pub async fn add_item_state_config(
        &mut self,
        entry: &ObjectStateConfig,
        prefabs: &PrefabRegistry,
    ) -> Option<usize> {
        let Some(object) =
            prefabs.instantiate(&entry.kind, entry.state.clone(), entry.parameters.clone())
        else {
            warn!(
                "Room '{}': unknown type attempted to load: {}",
                self.name, entry.kind
            );
            return None;
        };
        let batch = combined_objects(object);
        let count = batch.len();
        self.add_items(batch, ObjectList::Objects).await;
        Some(count)
    }

    pub async fn import_state_config(
        &mut self,
        config: &StateConfig,
        prefabs: &PrefabRegistry,
    ) -> ImportReport {
        let mut report = ImportReport::default();
        for entry in &config.objects {
            match self.add_item_state_config(entry, prefabs).await {
                Some(count) => {
                    report.imported += 1;
                    report.added += count;
                }
                None => report.skipped.push(entry.kind.clone()),
            }
        }
        info!(
            "Room '{}': imported {} entries ({} objects), skipped {}",
            self.name,
            report.imported,
            report.added,
            report.skipped.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let doc = StateConfig::from_json(r#"{"objects":[{"type":"Unknown","state":{}}]}"#).unwrap();
        assert_eq!(doc.objects.len(), 1);
        assert_eq!(doc.objects[0].kind, "Unknown");
        assert_eq!(doc.objects[0].state, ObjectState::default());
        assert!(doc.objects[0].parameters.is_none());
    }

    #[test]
    fn parameters_omitted_when_absent() {
        let doc = StateConfig {
            objects: vec![ObjectStateConfig {
                kind: "Wall".into(),
                state: ObjectState::at(1.0, 2.0),
                parameters: None,
            }],
        };
        let json = doc.to_json_pretty().unwrap();
        assert!(!json.contains("parameters"));
        assert!(json.contains("\"type\": \"Wall\""));
        assert_eq!(StateConfig::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            StateConfig::from_json("{\"objects\": 3}"),
            Err(RoomError::Document(_))
        ));
    }
}
