//! Level state round trip: export, import through the prefab registry,
//! composite objects and unknown types.

use std::sync::Arc;

use futures_lite::future::block_on;
use serde_json::json;

use roomsim::components::objectstate::ObjectState;
use roomsim::game::default_prefabs;
use roomsim::objects::GameObject;
use roomsim::resources::assets::MemoryAssets;
use roomsim::resources::room::{ObjectList, Room};
use roomsim::resources::roomconfig::RoomConfig;
use roomsim::systems::stateconfig::{ImportReport, ObjectStateConfig, StateConfig};

const LEVEL: &str = r#"{
  "objects": [
    { "type": "Wall", "state": { "position": { "x": 0, "y": 0 } }, "parameters": { "width": 64, "height": 8 } },
    { "type": "Gate", "state": { "position": { "x": 100, "y": 8 } }, "parameters": { "gap": 20 } },
    { "type": "Dragon", "state": { "position": { "x": 5, "y": 5 } } },
    { "type": "Crate", "state": { "position": { "x": 10, "y": 40 }, "rotation": 0.5 } }
  ]
}"#;

fn import(document: &StateConfig) -> (Room, ImportReport) {
    block_on(Room::from_state_config(
        "level",
        "bg.png",
        Arc::new(MemoryAssets::new().with_image("bg.png", 64, 64)),
        RoomConfig::new(),
        document,
        &default_prefabs(),
    ))
}

fn kinds(room: &Room) -> Vec<String> {
    room.list(ObjectList::Objects)
        .iter()
        .map(|o| o.kind().to_string())
        .collect()
}

#[test]
fn import_adds_composites_and_skips_unknown_types() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (room, report) = import(&document);

    assert_eq!(report.imported, 3);
    assert_eq!(report.added, 5);
    assert_eq!(report.skipped, vec!["Dragon".to_string()]);
    assert_eq!(kinds(&room), vec!["Wall", "Gate", "GatePost", "GatePost", "Crate"]);

    let gate_id = room.objects[1].id().to_string();
    for post in &room.objects[2..4] {
        assert_eq!(post.core().parent.as_deref(), Some(gate_id.as_str()));
    }
    assert_eq!(room.objects[1].core().spawned.len(), 2);
}

#[test]
fn export_writes_roots_only() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (room, _) = import(&document);
    let exported = room.export_state_config();

    let types: Vec<&str> = exported.objects.iter().map(|o| o.kind.as_str()).collect();
    assert_eq!(types, vec!["Wall", "Gate", "Crate"]);
    assert_eq!(exported.objects[0].parameters, Some(json!({"width": 64, "height": 8})));
    assert_eq!(exported.objects[1].parameters, Some(json!({"gap": 20})));
    assert_eq!(exported.objects[2].parameters, None);
    assert_eq!(exported.objects[2].state.rotation, 0.5);
}

#[test]
fn round_trip_reproduces_the_level() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (first, _) = import(&document);
    let exported = first.export_state_config();

    let text = exported.to_json_pretty().unwrap();
    let reparsed = StateConfig::from_json(&text).unwrap();
    assert_eq!(reparsed, exported);

    let (second, report) = import(&reparsed);
    assert!(report.skipped.is_empty());
    assert_eq!(kinds(&second), kinds(&first));
    assert_eq!(second.export_state_config(), exported);
}

#[test]
fn unsaved_objects_are_not_exported() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (mut room, _) = import(&document);
    room.objects[0].core_mut().save_to_file = false;
    let exported = room.export_state_config();
    let types: Vec<&str> = exported.objects.iter().map(|o| o.kind.as_str()).collect();
    assert_eq!(types, vec!["Gate", "Crate"]);
}

#[test]
fn unknown_type_alone_adds_nothing() {
    let mut room = Room::new("level", "bg.png", Arc::new(MemoryAssets::new()));
    let entry = ObjectStateConfig {
        kind: "Nope".to_string(),
        state: ObjectState::default(),
        parameters: None,
    };
    let added = block_on(room.add_item_state_config(&entry, &default_prefabs()));
    assert_eq!(added, None);
    assert!(room.objects.is_empty());
}

#[test]
fn exported_state_is_a_copy() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (mut room, _) = import(&document);
    let exported = room.export_state_config();

    room.objects[0].core_mut().state.position.x = 999.0;
    assert_eq!(exported.objects[0].state.position.x, 0.0);
}

#[test]
fn extra_state_fields_survive() {
    let text = r#"{ "objects": [
        { "type": "Wall", "state": { "position": { "x": 1, "y": 2 }, "hp": 3 } }
    ] }"#;
    let document = StateConfig::from_json(text).unwrap();
    let (room, _) = import(&document);
    let exported = room.export_state_config();
    assert_eq!(exported.objects[0].state.extra.get("hp"), Some(&json!(3)));
}

#[test]
fn removing_an_imported_gate_removes_its_posts() {
    let document = StateConfig::from_json(LEVEL).unwrap();
    let (mut room, _) = import(&document);
    let gate_id = room.objects[1].id().to_string();
    assert_eq!(room.remove(&gate_id, ObjectList::Objects), 3);
    assert_eq!(kinds(&room), vec!["Wall", "Crate"]);
}

#[test]
fn malformed_document_is_an_error() {
    assert!(StateConfig::from_json("{ \"objects\": 3 }").is_err());
    // Missing `objects` is an empty level.
    assert_eq!(StateConfig::from_json("{}").unwrap(), StateConfig::default());
}
