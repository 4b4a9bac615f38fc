use bevy::prelude::*;
use crate::game_logic::{format_race_time, PlayerId, PlayerState, RaceSession, CLOCK_REFRESH_MS};
use std::time::Duration;

#[derive(Component)]
pub struct SpeedLabel(pub PlayerId);

#[derive(Component)]
pub struct ClockLabel;

#[derive(Component)]
pub struct SplitDivider;

/// Throttles the clock label; the speed labels refresh every frame.
#[derive(Resource)]
pub struct RaceClock {
    pub refresh: Timer,
}

impl Default for RaceClock {
    fn default() -> Self {
        Self {
            refresh: Timer::new(Duration::from_millis(CLOCK_REFRESH_MS), TimerMode::Repeating),
        }
    }
}

pub fn speed_readout(player: PlayerId, state: &PlayerState) -> String {
    format!("{}: {} km/h", player.label(), state.speed_kmh())
}

fn label_font_size(player: PlayerId) -> f32 {
    match player {
        PlayerId::One => 28.0,
        PlayerId::Two => 24.0,
    }
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            ZIndex(100),
        ))
        .with_children(|hud| {
            for player in PlayerId::ALL {
                hud.spawn((
                    Text::new(speed_readout(player, &PlayerState::default())),
                    TextFont {
                        font_size: label_font_size(player),
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    TextShadow {
                        offset: Vec2::splat(2.0),
                        color: Color::BLACK,
                    },
                    Node {
                        margin: UiRect::bottom(Val::Px(10.0)),
                        ..default()
                    },
                    SpeedLabel(player),
                ));
            }
        });

    commands.spawn((
        Text::new(format_race_time(Duration::ZERO)),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextShadow {
            offset: Vec2::splat(2.0),
            color: Color::BLACK,
        },
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(10.0),
            ..default()
        },
        ZIndex(100),
        ClockLabel,
    ));

    // black bar between the two viewports
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Percent(50.0),
            width: Val::Percent(100.0),
            height: Val::Px(4.0),
            margin: UiRect::top(Val::Px(-2.0)),
            ..default()
        },
        BackgroundColor(Color::BLACK),
        ZIndex(99),
        SplitDivider,
    ));
}

pub fn update_speed_labels(
    session: Res<RaceSession>,
    mut labels: Query<(&SpeedLabel, &mut Text)>,
) {
    for (label, mut text) in &mut labels {
        // keep the initial text until the car exists
        if session.car(label.0).is_none() {
            continue;
        }
        let readout = speed_readout(label.0, session.state(label.0));
        if text.0 != readout {
            text.0 = readout;
        }
    }
}

pub fn tick_race_clock(
    time: Res<Time>,
    mut clock: ResMut<RaceClock>,
    mut label: Query<&mut Text, With<ClockLabel>>,
) {
    if !clock.refresh.tick(time.delta()).just_finished() {
        return;
    }
    if let Ok(mut text) = label.single_mut() {
        text.0 = format_race_time(time.elapsed());
    }
}
