use bevy::prelude::*;
use crate::config::Tuning;
use crate::game_logic::Lane;

/// Held keys for one player, sampled once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicsInput {
    pub left: bool,
    pub right: bool,
    pub accelerate: bool,
    pub brake: bool,
}

/// Simulation state of a single car
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub lane: Lane,
    pub speed: f32,
    pub distance_traveled: f32,
}

impl PlayerState {
    /// Speed as shown on the HUD.
    pub fn speed_kmh(&self) -> i32 {
        self.speed.round() as i32
    }
}

/// Advance one player by one frame.
///
/// Left is applied first, then right, each clamped to the edge lanes.
/// Holding both therefore ends in the centre from the left or centre lane,
/// and stays right from the right lane. Accelerate wins over brake; with
/// neither held the speed decays.
pub fn apply_physics(state: &mut PlayerState, input: &PhysicsInput, tuning: &Tuning) {
    if input.left {
        state.lane = state.lane.shift_left();
    }
    if input.right {
        state.lane = state.lane.shift_right();
    }

    if input.accelerate {
        state.speed = (state.speed + tuning.accel_step).min(tuning.max_speed);
    } else if input.brake {
        state.speed = (state.speed - tuning.brake_step).max(0.0);
    } else {
        state.speed *= tuning.decay;
    }

    state.distance_traveled += state.speed * tuning.distance_scale;
}

/// Where the car should be drawn this frame, given where it was drawn last.
/// Depth follows the distance exactly; the lateral position eases toward
/// the lane centre so lane changes animate over several frames.
pub fn car_translation(current: Vec3, state: &PlayerState, tuning: &Tuning) -> Vec3 {
    let target_x = state.lane.center_x(tuning.lane_width);
    Vec3::new(
        current.x + (target_x - current.x) * tuning.lane_blend,
        current.y,
        -state.distance_traveled,
    )
}
