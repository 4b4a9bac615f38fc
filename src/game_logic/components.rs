use bevy::prelude::*;

#[derive(Component)]
pub struct Car;

#[derive(Component)]
pub struct PlayerCamera;

#[derive(Component)]
pub struct HudCamera;

#[derive(Component)]
pub struct RoadGroup;

#[derive(Component)]
pub struct RoadSegment;

#[derive(Component)]
pub struct BackgroundTraffic;

/// Identifies which of the two players an entity belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }

    pub fn car_model(self) -> &'static str {
        match self {
            PlayerId::One => "red_car.glb",
            PlayerId::Two => "blue_car.glb",
        }
    }

    pub fn car_color(self) -> Color {
        match self {
            PlayerId::One => Color::srgb_u8(0xff, 0x00, 0x00),
            PlayerId::Two => Color::srgb_u8(0x00, 0x88, 0xff),
        }
    }
}
