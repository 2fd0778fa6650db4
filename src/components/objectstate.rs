//! Mutable per-object state: the part of an object that gets persisted.
//!
//! [`ObjectState`] is what a level document stores under `state` for each
//! object. Every field has a default so a partial (or empty) `state` record
//! still loads. Fields the engine does not know about are kept verbatim in
//! [`ObjectState::extra`] and written back on export.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Per-axis scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    pub width: f32,
    pub height: f32,
}

impl Default for Scaling {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectState {
    pub position: Vector,
    /// Displacement per tick.
    pub velocity: Vector,
    /// Degrees.
    pub rotation: f32,
    pub scaling: Scaling,
    /// Object-kind specific fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObjectState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vector::new(x, y);
        self
    }

    pub fn with_scaling(mut self, width: f32, height: f32) -> Self {
        self.scaling = Scaling { width, height };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_uses_defaults() {
        let state: ObjectState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.position, Vector::ZERO);
        assert_eq!(state.velocity, Vector::ZERO);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.scaling, Scaling::default());
        assert!(state.extra.is_empty());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let json = r#"{"position":{"x":3.0,"y":4.0},"health":7,"name":"bob"}"#;
        let state: ObjectState = serde_json::from_str(json).unwrap();
        assert_eq!(state.position, Vector::new(3.0, 4.0));
        assert_eq!(state.extra.get("health"), Some(&Value::from(7)));

        let back = serde_json::to_value(&state).unwrap();
        assert_eq!(back["name"], Value::from("bob"));
        assert_eq!(back["scaling"]["width"], Value::from(1.0));
    }
}
