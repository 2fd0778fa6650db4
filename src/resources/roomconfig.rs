//! Room configuration resource.
//!
//! Simulation settings loaded from an INI configuration file. Defaults are
//! safe to run with when no file exists.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! gravity = 0.5
//! max_fall_speed = 12
//!
//! [sim]
//! tick_seconds = 0.016
//! seed = 42
//!
//! [debug]
//! enabled = false
//!
//! [particle.spark]
//! sprite = sprites/spark.png
//! width = 4
//! height = 4
//! ```
//!
//! World y points up: gravity pulls `velocity.y` towards negative values
//! until the fall speed reaches `max_fall_speed`.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::particles::{ParticleDef, ParticleDefs};

/// Default safe values for startup
const DEFAULT_GRAVITY: f32 = 0.5;
const DEFAULT_MAX_FALL_SPEED: f32 = 12.0;
const DEFAULT_TICK_SECONDS: f32 = 1.0 / 60.0;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./room.ini";
const PARTICLE_SECTION_PREFIX: &str = "particle.";

#[derive(Resource, Debug, Clone)]
pub struct RoomConfig {
    /// Downward speed gained per tick by gravity-affected objects.
    pub gravity: f32,
    /// Fall speed beyond which gravity stops adding.
    pub max_fall_speed: f32,
    /// Seconds of world time per simulation frame.
    pub tick_seconds: f32,
    /// Seed for particle jitter. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Attach a debug probe to rooms built from this config.
    pub debug: bool,
    pub particles: ParticleDefs,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            max_fall_speed: DEFAULT_MAX_FALL_SPEED,
            tick_seconds: DEFAULT_TICK_SECONDS,
            seed: None,
            debug: DEFAULT_DEBUG,
            particles: ParticleDefs::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded room config: gravity={}, max_fall_speed={}, tick={}s, debug={}, {} particle defs",
            self.gravity,
            self.max_fall_speed,
            self.tick_seconds,
            self.debug,
            self.particles.len()
        );

        Ok(())
    }

    /// Parse configuration from INI text. Same merge rules as [`Self::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [physics] section
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(max_fall) = config.getfloat("physics", "max_fall_speed").ok().flatten() {
            self.max_fall_speed = max_fall as f32;
        }

        // [sim] section
        if let Some(tick) = config.getfloat("sim", "tick_seconds").ok().flatten() {
            self.tick_seconds = tick as f32;
        }
        if let Some(seed) = config.getuint("sim", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [debug] section
        if let Some(enabled) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = enabled;
        }

        // [particle.<name>] sections
        for section in config.sections() {
            let Some(name) = section.strip_prefix(PARTICLE_SECTION_PREFIX) else {
                continue;
            };
            let Some(sprite) = config.get(&section, "sprite") else {
                warn!("Particle section [{}] has no sprite, skipping", section);
                continue;
            };
            let width = config.getfloat(&section, "width").ok().flatten().unwrap_or(1.0);
            let height = config.getfloat(&section, "height").ok().flatten().unwrap_or(1.0);
            self.particles
                .insert(name, ParticleDef::new(sprite, width as f32, height as f32));
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [physics] section
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set(
            "physics",
            "max_fall_speed",
            Some(self.max_fall_speed.to_string()),
        );

        // [sim] section
        config.set("sim", "tick_seconds", Some(self.tick_seconds.to_string()));
        if let Some(seed) = self.seed {
            config.set("sim", "seed", Some(seed.to_string()));
        }

        // [debug] section
        config.set("debug", "enabled", Some(self.debug.to_string()));

        for (name, def) in self.particles.iter() {
            let section = format!("{}{}", PARTICLE_SECTION_PREFIX, name);
            config.set(&section, "sprite", Some(def.sprite.clone()));
            config.set(&section, "width", Some(def.width.to_string()));
            config.set(&section, "height", Some(def.height.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved room config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let mut config = RoomConfig::new();
        config.load_from_str("").unwrap();
        assert_eq!(config.gravity, DEFAULT_GRAVITY);
        assert_eq!(config.max_fall_speed, DEFAULT_MAX_FALL_SPEED);
        assert!(config.seed.is_none());
        assert!(!config.debug);
        assert!(config.particles.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let text = "\
[physics]
gravity = 1.5
max_fall_speed = 20

[sim]
tick_seconds = 0.5
seed = 7

[debug]
enabled = true

[particle.spark]
sprite = sprites/spark.png
width = 4
height = 2
";
        let mut config = RoomConfig::new();
        config.load_from_str(text).unwrap();
        assert_eq!(config.gravity, 1.5);
        assert_eq!(config.max_fall_speed, 20.0);
        assert_eq!(config.tick_seconds, 0.5);
        assert_eq!(config.seed, Some(7));
        assert!(config.debug);
        assert_eq!(
            config.particles.get("spark"),
            Some(&ParticleDef::new("sprites/spark.png", 4.0, 2.0))
        );
    }

    #[test]
    fn particle_section_without_sprite_is_skipped() {
        let mut config = RoomConfig::new();
        config
            .load_from_str("[particle.smoke]\nwidth = 3\n")
            .unwrap();
        assert!(!config.particles.contains("smoke"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = RoomConfig::with_path("/nonexistent/roomsim/room.ini");
        assert!(config.load_from_file().is_err());
    }
}
