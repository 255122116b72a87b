//! Demo world configuration resource.
//!
//! Loaded from an INI file. Every value has a default, so a missing file or a
//! missing key simply keeps the default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! friends = 1
//! enemies = 1
//! width = 500
//! height = 500
//! seed = 42
//!
//! [collision]
//! priority = 0
//!
//! [simulation]
//! ticks = 3
//! delta = 0.016
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::dispatch::collision::Priority;

/// Default safe values for startup
const DEFAULT_FRIENDS: u32 = 1;
const DEFAULT_ENEMIES: u32 = 1;
const DEFAULT_WORLD_WIDTH: f32 = 500.0;
const DEFAULT_WORLD_HEIGHT: f32 = 500.0;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_PRIORITY: Priority = Priority::HIGHEST;
const DEFAULT_TICKS: u32 = 3;
const DEFAULT_DELTA: f32 = 0.016;
const DEFAULT_CONFIG_PATH: &str = "./collidascope.ini";

/// Demo world configuration.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Number of friends to spawn.
    pub friends: u32,
    /// Number of enemies to spawn.
    pub enemies: u32,
    /// Width of the area extra objects are scattered over.
    pub world_width: f32,
    /// Height of the area extra objects are scattered over.
    pub world_height: f32,
    /// Seed for scattering extra objects.
    pub seed: u64,
    /// Priority friend/enemy collisions are tracked with.
    pub collision_priority: Priority,
    /// Ticks the binary runs.
    pub ticks: u32,
    /// Seconds per tick.
    pub delta: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            friends: DEFAULT_FRIENDS,
            enemies: DEFAULT_ENEMIES,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            seed: DEFAULT_SEED,
            collision_priority: DEFAULT_PRIORITY,
            ticks: DEFAULT_TICKS,
            delta: DEFAULT_DELTA,
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
    /// Returns an error if the file cannot be read or parsed, or if the
    /// collision priority is outside 0..=5.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)?;

        info!(
            "Loaded config: {} friends, {} enemies, {}x{} world, seed={}, priority={}, ticks={}, delta={}",
            self.friends,
            self.enemies,
            self.world_width,
            self.world_height,
            self.seed,
            self.collision_priority,
            self.ticks,
            self.delta
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used by tests and embedded setups.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_owned())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    /// Load the INI file if it exists.
    ///
    /// Returns `Ok(false)` and leaves the configuration untouched when there
    /// is no file at `config_path`.
    pub fn load_if_present(&mut self) -> Result<bool, String> {
        if !self.config_path.exists() {
            return Ok(false);
        }
        self.load_from_file()?;
        Ok(true)
    }

    /// Applies every value present in `config`. Nothing is changed on error.
    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();

        // [world] section
        if let Some(friends) = config.getuint("world", "friends").ok().flatten() {
            next.friends = to_count("friends", friends)?;
        }
        if let Some(enemies) = config.getuint("world", "enemies").ok().flatten() {
            next.enemies = to_count("enemies", enemies)?;
        }
        if let Some(width) = config.getfloat("world", "width").ok().flatten() {
            next.world_width = width as f32;
        }
        if let Some(height) = config.getfloat("world", "height").ok().flatten() {
            next.world_height = height as f32;
        }
        if let Some(seed) = config.getuint("world", "seed").ok().flatten() {
            next.seed = seed;
        }

        // [collision] section
        if let Some(priority) = config.getuint("collision", "priority").ok().flatten() {
            let priority = u8::try_from(priority)
                .map_err(|_| format!("Invalid collision priority: {}", priority))?;
            next.collision_priority = Priority::new(priority).map_err(|e| e.to_string())?;
        }

        // [simulation] section
        if let Some(ticks) = config.getuint("simulation", "ticks").ok().flatten() {
            next.ticks = to_count("ticks", ticks)?;
        }
        if let Some(delta) = config.getfloat("simulation", "delta").ok().flatten() {
            next.delta = delta as f32;
        }

        *self = next;
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [world] section
        config.set("world", "friends", Some(self.friends.to_string()));
        config.set("world", "enemies", Some(self.enemies.to_string()));
        config.set("world", "width", Some(self.world_width.to_string()));
        config.set("world", "height", Some(self.world_height.to_string()));
        config.set("world", "seed", Some(self.seed.to_string()));

        // [collision] section
        config.set(
            "collision",
            "priority",
            Some(self.collision_priority.to_string()),
        );

        // [simulation] section
        config.set("simulation", "ticks", Some(self.ticks.to_string()));
        config.set("simulation", "delta", Some(self.delta.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn to_count(name: &str, value: u64) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("Invalid {}: {}", name, value))
}
