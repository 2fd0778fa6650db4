//! Spatial queries against a room list.
//!
//! Four query shapes, built from two choices:
//!
//! | scope \ tags          | exclusion (`exempt`)          | inclusion (`required`)                  |
//! |-----------------------|-------------------------------|-----------------------------------------|
//! | collision objects     | [`Room::check_collisions`]    | [`Room::check_collisions_inclusive`]    |
//! | all objects           | [`Room::check_objects`]       | [`Room::check_objects_inclusive`]       |
//!
//! An exclusion query matches objects carrying none of `exempt`; an inclusion
//! query matches objects carrying every tag in `required`. Overlap is decided
//! by [`GameObject::collides_with_box`], which is strict: touching edges do
//! not match. Each `*_point` variant queries a zero-sized box at the point.
//!
//! When a debug probe is attached every query reports its box before
//! filtering. Results are the same with or without a probe.

use crate::components::boxcollider::CollisionBox;
use crate::components::objectstate::Vector;
use crate::objects::GameObject;
use crate::resources::room::{ObjectList, Room};

/// Collision-bearing objects overlapping `query` and carrying none of `exempt`.
pub fn check_all_collisions<'a, S: AsRef<str>>(
    query: &CollisionBox,
    list: &'a [Box<dyn GameObject>],
    exempt: &[S],
) -> Vec<&'a dyn GameObject> {
    list.iter()
        .map(|o| o.as_ref())
        .filter(|o| o.core().collision)
        .filter(|o| o.collides_with_box(query) && o.core().tags.contains_none(exempt))
        .collect()
}

/// Any objects overlapping `query` and carrying none of `exempt`.
pub fn check_all_objects<'a, S: AsRef<str>>(
    query: &CollisionBox,
    list: &'a [Box<dyn GameObject>],
    exempt: &[S],
) -> Vec<&'a dyn GameObject> {
    list.iter()
        .map(|o| o.as_ref())
        .filter(|o| o.collides_with_box(query) && o.core().tags.contains_none(exempt))
        .collect()
}

/// Collision-bearing objects overlapping `query` and carrying every tag in `required`.
pub fn check_all_collisions_inclusive<'a, S: AsRef<str>>(
    query: &CollisionBox,
    list: &'a [Box<dyn GameObject>],
    required: &[S],
) -> Vec<&'a dyn GameObject> {
    list.iter()
        .map(|o| o.as_ref())
        .filter(|o| o.core().collision)
        .filter(|o| o.collides_with_box(query) && o.core().tags.contains_all(required))
        .collect()
}

/// Any objects overlapping `query` and carrying every tag in `required`.
pub fn check_all_objects_inclusive<'a, S: AsRef<str>>(
    query: &CollisionBox,
    list: &'a [Box<dyn GameObject>],
    required: &[S],
) -> Vec<&'a dyn GameObject> {
    list.iter()
        .map(|o| o.as_ref())
        .filter(|o| o.collides_with_box(query) && o.core().tags.contains_all(required))
        .collect()
}

impl Room {
    fn visualize_query(&self, query: &CollisionBox) {
        if let Some(probe) = &self.debug {
            probe.query_box(query);
        }
    }

    pub fn check_collisions<S: AsRef<str>>(
        &self,
        query: &CollisionBox,
        exempt: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.visualize_query(query);
        check_all_collisions(query, self.list(list), exempt)
    }

    pub fn check_objects<S: AsRef<str>>(
        &self,
        query: &CollisionBox,
        exempt: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.visualize_query(query);
        check_all_objects(query, self.list(list), exempt)
    }

    pub fn check_collisions_inclusive<S: AsRef<str>>(
        &self,
        query: &CollisionBox,
        required: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.visualize_query(query);
        check_all_collisions_inclusive(query, self.list(list), required)
    }

    pub fn check_objects_inclusive<S: AsRef<str>>(
        &self,
        query: &CollisionBox,
        required: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.visualize_query(query);
        check_all_objects_inclusive(query, self.list(list), required)
    }

    pub fn check_collisions_point<S: AsRef<str>>(
        &self,
        pos: Vector,
        exempt: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.check_collisions(&CollisionBox::point(pos.x, pos.y), exempt, list)
    }

    pub fn check_objects_point<S: AsRef<str>>(
        &self,
        pos: Vector,
        exempt: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.check_objects(&CollisionBox::point(pos.x, pos.y), exempt, list)
    }

    pub fn check_collisions_point_inclusive<S: AsRef<str>>(
        &self,
        pos: Vector,
        required: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.check_collisions_inclusive(&CollisionBox::point(pos.x, pos.y), required, list)
    }

    pub fn check_objects_point_inclusive<S: AsRef<str>>(
        &self,
        pos: Vector,
        required: &[S],
        list: ObjectList,
    ) -> Vec<&dyn GameObject> {
        self.check_objects_inclusive(&CollisionBox::point(pos.x, pos.y), required, list)
    }
}
