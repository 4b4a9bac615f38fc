use bevy::prelude::*;

// Speed model, applied once per frame
pub const ACCEL_STEP: f32 = 0.8;
pub const BRAKE_STEP: f32 = 2.0;
pub const SPEED_DECAY: f32 = 0.985;
pub const MAX_SPEED: f32 = 320.0;
pub const DISTANCE_SCALE: f32 = 0.1;

// Lanes
pub const LANE_WIDTH: f32 = 8.0;
pub const LANE_BLEND: f32 = 0.15;

// Chase camera
pub const CAMERA_HEIGHT: f32 = 8.0;
pub const CAMERA_DISTANCE: f32 = 20.0;
pub const CAMERA_BLEND: f32 = 0.08;
pub const CAMERA_LOOK_AHEAD: Vec3 = Vec3::new(0.0, 3.0, -30.0);
pub const CAMERA_FOV_DEGREES: f32 = 70.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;

// Road
pub const ROAD_WIDTH: f32 = 30.0;
pub const SEGMENT_LENGTH: f32 = 40.0;
pub const VISIBLE_SEGMENTS: i32 = 60;
pub const LOD_DISTANCE: f32 = 400.0;
pub const ROAD_SCROLL_RATE: f32 = 0.02; // world units per millisecond
pub const MAX_VISIBLE_SEGMENTS: i32 = 1000;

// Background traffic (decorative only)
pub const TRAFFIC_COUNT: usize = 40;
pub const TRAFFIC_START_Z: f32 = -200.0;
pub const TRAFFIC_SPACING: f32 = 40.0;
pub const TRAFFIC_SPREAD: f32 = 8.0;
pub const TRAFFIC_SIZE: Vec3 = Vec3::new(4.0, 2.0, 8.0);
pub const MAX_TRAFFIC: usize = 1000;

// Rendering
pub const CAR_SCALE: f32 = 1.3;
pub const WIN_W: f32 = 1280.;
pub const WIN_H: f32 = 720.;
pub const SHADOW_MAP_SIZE: usize = 2048;

// HUD
pub const CLOCK_REFRESH_MS: u64 = 50;
