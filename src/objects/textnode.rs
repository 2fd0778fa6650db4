//! Text placed in room space (as opposed to the HUD layer).

use crate::components::objectstate::ObjectState;
use crate::components::ttl::Ttl;
use crate::objects::{GameObject, Lifecycle, ObjectCore};

pub const TEXT_NODE_KIND: &str = "TextNode";

pub struct TextNode {
    core: ObjectCore,
    pub text: String,
    pub font_size: f32,
    /// Optional lifetime; permanent when `None`.
    pub ttl: Option<Ttl>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, state: ObjectState, font_size: f32) -> Self {
        let text = text.into();
        // Rough extent so the node can be found with an object query.
        let width = text.chars().count() as f32 * font_size * 0.5;
        let core = ObjectCore::new(state, width, font_size)
            .with_collision(false)
            .with_save_to_file(false)
            .with_tags(["text"]);
        Self {
            core,
            text,
            font_size,
            ttl: None,
        }
    }

    pub fn with_lifetime(mut self, ticks: u32) -> Self {
        self.ttl = Some(Ttl::new(ticks));
        self
    }
}

impl GameObject for TextNode {
    fn kind(&self) -> &str {
        TEXT_NODE_KIND
    }

    fn core(&self) -> &ObjectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ObjectCore {
        &mut self.core
    }

    /// Text drifts by its velocity and expires when its lifetime runs out.
    fn update(&mut self, _time: f32) -> Lifecycle {
        let velocity = self.core.state.velocity;
        self.core.state.position.x += velocity.x;
        self.core.state.position.y += velocity.y;
        match self.ttl.as_mut().map(|ttl| ttl.tick()) {
            Some(true) => Lifecycle::Expired,
            _ => Lifecycle::Alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::objectstate::Vector;

    #[test]
    fn permanent_node_drifts() {
        let mut node = TextNode::new("hello", ObjectState::at(0.0, 0.0).with_velocity(0.0, 1.0), 8.0);
        assert_eq!(node.update(0.0), Lifecycle::Alive);
        assert_eq!(node.update(0.0), Lifecycle::Alive);
        assert_eq!(node.core().state.position, Vector::new(0.0, 2.0));
        assert_eq!(node.core().width, 20.0);
    }

    #[test]
    fn timed_node_expires() {
        let mut node = TextNode::new("+10", ObjectState::default(), 8.0).with_lifetime(2);
        assert_eq!(node.update(0.0), Lifecycle::Alive);
        assert_eq!(node.update(0.0), Lifecycle::Expired);
    }
}
