//! Registry integration tests: adding, removing and looking up room objects,
//! asset loading and teardown.

use std::sync::Arc;

use futures_lite::future::block_on;

use roomsim::components::objectstate::ObjectState;
use roomsim::events::debug::DebugEvent;
use roomsim::objects::{GameObject, LoadFuture, ObjectCore};
use roomsim::resources::assets::{AssetError, AssetSource, MemoryAssets};
use roomsim::resources::controls::{BindTable, TriggerPhase};
use roomsim::resources::debugmode::DebugProbe;
use roomsim::resources::room::{ObjectList, Room, RoomError};

struct Block {
    core: ObjectCore,
    sprite: Option<String>,
}

impl Block {
    fn new(id: &str, tags: &[&str]) -> Self {
        Self {
            core: ObjectCore::new(ObjectState::default(), 4.0, 4.0)
                .with_id(id)
                .with_tags(tags.iter().copied()),
            sprite: None,
        }
    }

    fn with_sprite(mut self, sprite: &str) -> Self {
        self.sprite = Some(sprite.to_string());
        self
    }
}

impl GameObject for Block {
    fn kind(&self) -> &str {
        "Block"
    }
    fn core(&self) -> &ObjectCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }
    fn load(&mut self, assets: &Arc<dyn AssetSource>) -> LoadFuture<'_> {
        let pending = self.sprite.as_ref().map(|s| assets.load_image(s));
        Box::pin(async move {
            if let Some(pending) = pending {
                pending.await?;
            }
            Ok::<(), AssetError>(())
        })
    }
}

fn assets() -> Arc<dyn AssetSource> {
    Arc::new(
        MemoryAssets::new()
            .with_image("bg.png", 320, 240)
            .with_image("block.png", 4, 4)
            .with_audio("theme.ogg"),
    )
}

fn room() -> Room {
    Room::new("test", "bg.png", assets())
}

fn ids(room: &Room, list: ObjectList) -> Vec<String> {
    room.list(list).iter().map(|o| o.id().to_string()).collect()
}

fn add(room: &mut Room, blocks: Vec<Block>, list: ObjectList) {
    let boxed: Vec<Box<dyn GameObject>> = blocks
        .into_iter()
        .map(|b| Box::new(b) as Box<dyn GameObject>)
        .collect();
    block_on(room.add_items(boxed, list));
}

#[test]
fn add_items_preserves_order_and_assigns_room() {
    let mut room = room();
    add(
        &mut room,
        vec![Block::new("a", &[]), Block::new("b", &[]), Block::new("c", &[])],
        ObjectList::Objects,
    );
    block_on(room.add_item(Box::new(Block::new("d", &[])), ObjectList::Objects));

    assert_eq!(ids(&room, ObjectList::Objects), vec!["a", "b", "c", "d"]);
    for object in &room.objects {
        assert_eq!(object.core().room.as_deref(), Some("test"));
    }
}

#[test]
fn objects_are_loaded_before_insertion() {
    let mut room = room();
    add(
        &mut room,
        vec![Block::new("a", &[]).with_sprite("block.png")],
        ObjectList::Objects,
    );
    let batch: Vec<Box<dyn GameObject>> = vec![Box::new(Block::new("b", &[]))];
    let staged = block_on(room.stage(batch, ObjectList::Objects));
    assert_eq!(room.objects.len(), 1, "staging does not touch the room");
    room.commit(staged);
    assert_eq!(ids(&room, ObjectList::Objects), vec!["a", "b"]);
}

#[test]
fn failed_object_load_still_inserts() {
    let mut room = room();
    add(
        &mut room,
        vec![Block::new("broken", &[]).with_sprite("missing.png")],
        ObjectList::Objects,
    );
    assert!(room.get_by_id("broken").is_some());
}

#[test]
fn add_to_other_lists() {
    let mut room = room();
    add(&mut room, vec![Block::new("p", &[])], ObjectList::Particles);
    add(&mut room, vec![Block::new("t", &[])], ObjectList::TextNodes);
    assert!(room.objects.is_empty());
    assert_eq!(ids(&room, ObjectList::Particles), vec!["p"]);
    assert_eq!(ids(&room, ObjectList::TextNodes), vec!["t"]);
    // Lookup only covers the primary list.
    assert!(room.get_by_id("p").is_none());
}

#[test]
fn remove_absent_id_is_noop() {
    let mut room = room();
    add(&mut room, vec![Block::new("a", &[]), Block::new("b", &[])], ObjectList::Objects);
    assert_eq!(room.remove("zzz", ObjectList::Objects), 0);
    assert_eq!(ids(&room, ObjectList::Objects), vec!["a", "b"]);
}

#[test]
fn remove_deletes_every_match() {
    let mut room = room();
    add(
        &mut room,
        vec![
            Block::new("dup", &[]),
            Block::new("dup", &[]),
            Block::new("keep", &[]),
            Block::new("dup", &[]),
        ],
        ObjectList::Objects,
    );
    assert_eq!(room.remove("dup", ObjectList::Objects), 3);
    assert_eq!(ids(&room, ObjectList::Objects), vec!["keep"]);
}

#[test]
fn remove_adjacent_duplicates_in_particle_list() {
    let mut room = room();
    add(
        &mut room,
        vec![Block::new("x", &[]), Block::new("x", &[]), Block::new("y", &[])],
        ObjectList::Particles,
    );
    assert_eq!(room.remove("x", ObjectList::Particles), 2);
    assert_eq!(ids(&room, ObjectList::Particles), vec!["y"]);
}

#[test]
fn remove_parent_takes_spawned_descendants() {
    let mut room = room();
    let mut parent = Block::new("parent", &[]);
    let mut child = Block::new("child", &[]);
    let mut grandchild = Block::new("grandchild", &[]);
    child.core.adopt(&mut grandchild.core);
    parent.core.adopt(&mut child.core);
    // A spawned set pointing back at the parent must not loop.
    grandchild.core.spawned.push("parent".to_string());
    add(
        &mut room,
        vec![parent, child, grandchild, Block::new("other", &[])],
        ObjectList::Objects,
    );

    assert_eq!(room.remove("parent", ObjectList::Objects), 3);
    assert_eq!(ids(&room, ObjectList::Objects), vec!["other"]);
}

#[test]
fn removing_a_child_leaves_the_parent() {
    let mut room = room();
    let mut parent = Block::new("parent", &[]);
    let mut child = Block::new("child", &[]);
    parent.core.adopt(&mut child.core);
    add(&mut room, vec![parent, child], ObjectList::Objects);

    assert_eq!(room.remove("child", ObjectList::Objects), 1);
    assert_eq!(ids(&room, ObjectList::Objects), vec!["parent"]);
}

#[test]
fn get_by_id_returns_first_match() {
    let mut room = room();
    let mut first = Block::new("dup", &["first"]);
    first.core.state.position.x = 1.0;
    add(&mut room, vec![first, Block::new("dup", &["second"])], ObjectList::Objects);

    let found = room.get_by_id("dup").unwrap();
    assert!(found.has_tag("first"));
    assert!(room.get_by_id("nope").is_none());

    room.get_by_id_mut("dup").unwrap().core_mut().state.position.x = 9.0;
    assert_eq!(room.objects[0].core().state.position.x, 9.0);
}

#[test]
fn get_by_tag_filters_primary_list() {
    let mut room = room();
    add(
        &mut room,
        vec![
            Block::new("a", &["enemy"]),
            Block::new("b", &["friend"]),
            Block::new("c", &["enemy", "flying"]),
        ],
        ObjectList::Objects,
    );
    add(&mut room, vec![Block::new("p", &["enemy"])], ObjectList::Particles);

    let enemies = room.get_by_tag("enemy");
    let enemy_ids: Vec<&str> = enemies.iter().map(|o| o.id()).collect();
    assert_eq!(enemy_ids, vec!["a", "c"]);
    assert!(room.get_by_tag("ghost").is_empty());
}

#[test]
fn debug_probe_sees_primary_list_changes_only() {
    let mut room = room();
    let (probe, rx) = DebugProbe::channel();
    room.attach_debug(probe);

    add(&mut room, vec![Block::new("a", &[]), Block::new("b", &[])], ObjectList::Objects);
    add(&mut room, vec![Block::new("p", &[])], ObjectList::Particles);
    room.remove("p", ObjectList::Particles);
    room.remove("a", ObjectList::Objects);

    let events: Vec<DebugEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            DebugEvent::ObjectListChanged { count: 2 },
            DebugEvent::ObjectListChanged { count: 1 },
        ]
    );
}

#[test]
fn load_marks_room_ready() {
    let mut room = room();
    room.audio_tracks.push("theme.ogg".to_string());
    room.audio_tracks.push("missing.ogg".to_string());
    assert!(!room.is_ready());
    assert!(room.render_frame().is_none());

    block_on(room.load()).unwrap();

    assert!(room.is_ready());
    let frame = room.render_frame().unwrap();
    assert_eq!(frame.sprite_sheet, "bg.png");
    assert_eq!((frame.sprite_width, frame.sprite_height), (320.0, 240.0));
    assert_eq!(frame.opacity, 1.0);
}

#[test]
fn background_failure_is_fatal() {
    let mut room = Room::new("broken", "nowhere.png", assets());
    let result = block_on(room.load());
    assert!(matches!(
        result,
        Err(RoomError::Background { ref url, source: AssetError::NotFound(_) }) if url == "nowhere.png"
    ));
    assert!(!room.is_ready());
}

#[test]
fn teardown_releases_binds_and_lists() {
    let mut room = room();
    let mut controls = BindTable::new();
    room.bind_control(&mut controls, "KeyAdown", TriggerPhase::Once, Box::new(|| {}), 1);
    room.bind_control(&mut controls, "mouse0down", TriggerPhase::Repeat, Box::new(|| {}), 5);
    add(&mut room, vec![Block::new("a", &[])], ObjectList::Objects);
    add(&mut room, vec![Block::new("p", &[])], ObjectList::Particles);
    block_on(room.load()).unwrap();
    assert_eq!(controls.len(), 2);

    room.teardown(Some(&mut controls));

    assert!(controls.is_empty());
    assert!(room.binds.is_empty());
    assert!(room.objects.is_empty());
    assert!(room.particles_arr.is_empty());
    assert!(!room.is_ready());
}
