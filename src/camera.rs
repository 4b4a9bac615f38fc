use bevy::prelude::*;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::render::camera::ClearColorConfig;
use bevy::window::{PrimaryWindow, WindowResized};
use crate::config::RaceConfig;
use crate::game_logic::{
    chase_camera, split_viewports, viewport_for, Car, HudCamera, PlayerCamera, PlayerId,
    RaceSession,
};

// One perspective camera per player, plus an overlay camera so the HUD spans
// the whole window instead of a single viewport.
pub fn spawn_cameras(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<RaceConfig>,
) {
    let window_size = windows.single().map(|w| w.physical_size()).ok();

    for player in PlayerId::ALL {
        let viewport = window_size
            .and_then(|size| viewport_for(player, size))
            .map(|rect| rect.to_viewport());

        commands.spawn((
            Camera3d::default(),
            Camera {
                order: player.index() as isize,
                viewport,
                ..default()
            },
            Projection::from(PerspectiveProjection {
                fov: config.camera.fov_degrees.to_radians(),
                near: config.camera.near,
                far: config.camera.far,
                ..default()
            }),
            Tonemapping::AcesFitted,
            Transform::default(),
            PlayerCamera,
            player,
        ));
    }

    commands.spawn((
        Camera2d,
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
        HudCamera,
    ));
}

// Camera movement system that chases each player's car
pub fn follow_cars(
    session: Res<RaceSession>,
    config: Res<RaceConfig>,
    cars: Query<&Transform, (With<Car>, Without<PlayerCamera>)>,
    mut cameras: Query<(&PlayerId, &mut Transform), With<PlayerCamera>>,
) {
    for (player, mut camera) in &mut cameras {
        let Some(car) = session.car(*player) else {
            continue;
        };
        let Ok(car_transform) = cars.get(car) else {
            continue;
        };
        *camera = chase_camera(&camera, car_transform.translation, &config.camera);
    }
}

// Keep the top/bottom split when the window changes size. The projection's
// aspect ratio follows the viewport.
pub fn fit_viewports(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window>,
    mut cameras: Query<(&PlayerId, &mut Camera), With<PlayerCamera>>,
) {
    for event in resized.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        let Some(rects) = split_viewports(window.physical_size()) else {
            continue;
        };
        for (player, mut camera) in &mut cameras {
            camera.viewport = Some(rects[player.index()].to_viewport());
        }
        debug!("Viewports refit to {}", window.physical_size());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    fn resize_app() -> (App, [Entity; 2]) {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .add_systems(Update, fit_viewports);
        let cameras = PlayerId::ALL.map(|player| {
            app.world_mut()
                .spawn((Camera::default(), PlayerCamera, player))
                .id()
        });
        (app, cameras)
    }

    fn send_resize(app: &mut App, width: f32, height: f32) {
        let window = app
            .world_mut()
            .spawn(Window {
                resolution: WindowResolution::new(width, height),
                ..default()
            })
            .id();
        app.world_mut().send_event(WindowResized {
            window,
            width,
            height,
        });
        app.update();
    }

    fn viewport_of(app: &App, camera: Entity) -> Option<(UVec2, UVec2)> {
        app.world()
            .get::<Camera>(camera)
            .unwrap()
            .viewport
            .as_ref()
            .map(|v| (v.physical_position, v.physical_size))
    }

    #[test]
    fn test_resize_refits_both_halves() {
        let (mut app, cameras) = resize_app();
        send_resize(&mut app, 800.0, 600.0);

        let expected = split_viewports(UVec2::new(800, 600)).unwrap();
        for player in PlayerId::ALL {
            let rect = expected[player.index()];
            assert_eq!(
                viewport_of(&app, cameras[player.index()]),
                Some((rect.position, rect.size))
            );
        }
    }

    #[test]
    fn test_degenerate_resize_keeps_viewports() {
        let (mut app, cameras) = resize_app();
        send_resize(&mut app, 1280.0, 720.0);
        let before = cameras.map(|camera| viewport_of(&app, camera));

        send_resize(&mut app, 1280.0, 0.0);

        for (camera, previous) in cameras.into_iter().zip(before) {
            assert!(previous.is_some());
            assert_eq!(viewport_of(&app, camera), previous);
        }
    }

    #[test]
    fn test_camera_waits_for_car() {
        let mut app = App::new();
        app.insert_resource(RaceConfig::default())
            .init_resource::<RaceSession>()
            .add_systems(Update, follow_cars);

        let camera = app
            .world_mut()
            .spawn((Transform::default(), PlayerCamera, PlayerId::One))
            .id();
        app.update();
        assert_eq!(*app.world().get::<Transform>(camera).unwrap(), Transform::default());

        let car = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, -100.0), Car, PlayerId::One))
            .id();
        app.world_mut()
            .resource_mut::<RaceSession>()
            .attach_car(PlayerId::One, car);
        app.update();

        let moved = app.world().get::<Transform>(camera).unwrap();
        assert!(moved.translation.z < 0.0);
        assert!(moved.translation.y > 0.0);
    }
}
