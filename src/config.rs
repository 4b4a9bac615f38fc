use bevy::prelude::*;
use crate::game_logic::*;
use crate::input::KeyBindings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH: &str = "assets/race.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse race config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid race config: {0}")]
    Invalid(String),
}

/// Per-frame driving model. Steps are per rendered frame, not per second.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub accel_step: f32,
    pub brake_step: f32,
    pub decay: f32,
    pub max_speed: f32,
    pub distance_scale: f32,
    pub lane_width: f32,
    pub lane_blend: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel_step: ACCEL_STEP,
            brake_step: BRAKE_STEP,
            decay: SPEED_DECAY,
            max_speed: MAX_SPEED,
            distance_scale: DISTANCE_SCALE,
            lane_width: LANE_WIDTH,
            lane_blend: LANE_BLEND,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub height: f32,
    pub distance: f32,
    pub blend: f32,
    pub look_ahead: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            height: CAMERA_HEIGHT,
            distance: CAMERA_DISTANCE,
            blend: CAMERA_BLEND,
            look_ahead: CAMERA_LOOK_AHEAD,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoadLayout {
    pub width: f32,
    pub segment_length: f32,
    /// Segments spawned on each side of the origin.
    pub visible_segments: i32,
    pub lod_distance: f32,
    pub scroll_rate: f32,
}

impl Default for RoadLayout {
    fn default() -> Self {
        Self {
            width: ROAD_WIDTH,
            segment_length: SEGMENT_LENGTH,
            visible_segments: VISIBLE_SEGMENTS,
            lod_distance: LOD_DISTANCE,
            scroll_rate: ROAD_SCROLL_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrafficLayout {
    pub count: usize,
    pub start_z: f32,
    pub spacing: f32,
    pub spread: f32,
    pub size: Vec3,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for TrafficLayout {
    fn default() -> Self {
        Self {
            count: TRAFFIC_COUNT,
            start_z: TRAFFIC_START_Z,
            spacing: TRAFFIC_SPACING,
            spread: TRAFFIC_SPREAD,
            size: TRAFFIC_SIZE,
            min_scale: 0.9,
            max_scale: 1.2,
        }
    }
}

/// Everything tunable about a race session. Every field is optional in the
/// config file; missing ones keep their defaults.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    pub tuning: Tuning,
    pub camera: CameraTuning,
    pub road: RoadLayout,
    pub traffic: TrafficLayout,
    pub bindings: KeyBindings,
}

impl RaceConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RaceConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns `Ok(None)` when there is no file at `path`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_json(&text).map(Some)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                info!("Loaded race config from {}", path.display());
                config
            }
            Ok(None) => {
                info!("No race config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("{err}, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tuning;
        if t.max_speed < 0.0 || t.accel_step < 0.0 || t.brake_step < 0.0 {
            return Err(ConfigError::Invalid(
                "max_speed, accel_step and brake_step must not be negative".into(),
            ));
        }
        if !(0.0..1.0).contains(&t.decay) {
            return Err(ConfigError::Invalid(format!(
                "decay must be in [0, 1), got {}",
                t.decay
            )));
        }
        if t.distance_scale < 0.0 {
            return Err(ConfigError::Invalid("distance_scale must not be negative".into()));
        }
        if !(t.lane_width > 0.0 && t.lane_width.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "lane_width must be positive, got {}",
                t.lane_width
            )));
        }
        for (name, blend) in [("lane_blend", t.lane_blend), ("camera.blend", self.camera.blend)] {
            if !(blend > 0.0 && blend <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in (0, 1], got {blend}"
                )));
            }
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::Invalid("camera needs 0 < near < far".into()));
        }
        let road = &self.road;
        if !(road.width > 0.0 && road.width.is_finite()) || road.segment_length <= 0.0 {
            return Err(ConfigError::Invalid(
                "road needs a positive width and segment_length".into(),
            ));
        }
        if !(1..=MAX_VISIBLE_SEGMENTS).contains(&road.visible_segments) {
            return Err(ConfigError::Invalid(format!(
                "visible_segments must be in 1..={MAX_VISIBLE_SEGMENTS}, got {}",
                road.visible_segments
            )));
        }
        if self.traffic.count > MAX_TRAFFIC {
            return Err(ConfigError::Invalid(format!(
                "traffic.count must be at most {MAX_TRAFFIC}, got {}",
                self.traffic.count
            )));
        }
        if self.traffic.min_scale <= 0.0 || self.traffic.min_scale > self.traffic.max_scale {
            return Err(ConfigError::Invalid(
                "traffic needs 0 < min_scale <= max_scale".into(),
            ));
        }
        Ok(())
    }
}

// Runs in PreStartup so every Startup system can read the config.
pub fn load_race_config(mut commands: Commands) {
    commands.insert_resource(RaceConfig::load_or_default(Path::new(CONFIG_PATH)));
}
