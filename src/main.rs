mod camera;
mod car;
mod config;
mod game_logic;
mod hud;
mod input;
mod track;
mod traffic;

use bevy::prelude::*;
use bevy::pbr::DirectionalLightShadowMap;
use bevy::window::PresentMode;
use camera::{fit_viewports, follow_cars, spawn_cameras};
use car::{move_cars, report_failed_cars, spawn_cars, step_players};
use config::load_race_config;
use game_logic::{RaceSession, SHADOW_MAP_SIZE, WIN_H, WIN_W};
use hud::{spawn_hud, tick_race_clock, update_speed_labels, RaceClock};
use input::{sample_inputs, PlayerInputs};
use track::{scroll_road, spawn_road};
use traffic::spawn_traffic;

const SKY_COLOR: Color = Color::srgb_u8(0x87, 0xce, 0xeb);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Split Racers".into(),
                resolution: (WIN_W, WIN_H).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(SKY_COLOR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 500.0,
            ..default()
        })
        .insert_resource(DirectionalLightShadowMap {
            size: SHADOW_MAP_SIZE,
        })
        .init_resource::<RaceSession>()
        .init_resource::<PlayerInputs>()
        .init_resource::<RaceClock>()
        .add_systems(PreStartup, load_race_config)
        .add_systems(
            Startup,
            (
                spawn_cameras,
                light_setup,
                spawn_road,
                spawn_traffic,
                spawn_cars,
                spawn_hud,
            ),
        )
        // one simulation step per rendered frame, in a fixed order
        .add_systems(
            Update,
            (
                sample_inputs,
                step_players,
                move_cars,
                follow_cars,
                scroll_road,
                update_speed_labels,
                tick_race_clock,
            )
                .chain(),
        )
        .add_systems(Update, (fit_viewports, report_failed_cars))
        .run();
}

fn light_setup(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: light_consts::lux::AMBIENT_DAYLIGHT,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(50.0, 100.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_setup() {
        let mut app = App::new();
        app.add_systems(Startup, light_setup);
        app.update();

        let world = app.world_mut();
        let mut lights = world.query::<(&DirectionalLight, &Transform)>();
        let (light, transform) = lights.single(world).unwrap();
        assert_eq!(light.illuminance, light_consts::lux::AMBIENT_DAYLIGHT);
        assert!(light.shadows_enabled);
        assert_eq!(transform.translation, Vec3::new(50.0, 100.0, 50.0));
        // pointing down toward the origin
        assert!(transform.forward().y < 0.0);
    }
}
