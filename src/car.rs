use bevy::prelude::*;
use bevy::asset::LoadState;
use bevy::scene::SceneInstanceReady;
use crate::config::RaceConfig;
use crate::game_logic::{car_translation, Car, PlayerId, RaceSession, CAR_SCALE};
use crate::input::PlayerInputs;

// Car spawning functionality
pub fn spawn_cars(mut commands: Commands, asset_server: Res<AssetServer>) {
    for player in PlayerId::ALL {
        let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(player.car_model()));
        commands
            .spawn((
                SceneRoot(scene),
                Transform::from_scale(Vec3::splat(CAR_SCALE)),
                Car,
                player,
            ))
            .observe(on_car_ready);
    }
}

pub fn is_body_part(name: &str) -> bool {
    name.contains("body")
}

// Give every mesh its own material so the two cars can be tinted separately,
// then hand the car over to the simulation.
fn on_car_ready(
    trigger: Trigger<SceneInstanceReady>,
    players: Query<&PlayerId, With<Car>>,
    children: Query<&Children>,
    meshes: Query<(&MeshMaterial3d<StandardMaterial>, Option<&Name>, Option<&ChildOf>)>,
    names: Query<&Name>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut session: ResMut<RaceSession>,
    mut commands: Commands,
) {
    let car = trigger.target();
    let Ok(player) = players.get(car) else {
        return;
    };

    let mut tinted = 0;
    for part in children.iter_descendants(car) {
        let Ok((material, name, parent)) = meshes.get(part) else {
            continue;
        };
        let Some(mut own) = materials.get(&material.0).cloned() else {
            continue;
        };

        // glTF primitives are children of the named node
        let body = name.is_some_and(|n| is_body_part(n.as_str()))
            || parent
                .and_then(|p| names.get(p.0).ok())
                .is_some_and(|n| is_body_part(n.as_str()));
        if body {
            own.base_color = player.car_color();
            tinted += 1;
        }
        commands.entity(part).insert(MeshMaterial3d(materials.add(own)));
    }

    session.attach_car(*player, car);
    info!("{} car ready ({} body meshes tinted)", player.label(), tinted);
}

// Cars whose model never loads simply stay out of the session.
pub fn report_failed_cars(
    asset_server: Res<AssetServer>,
    cars: Query<(&PlayerId, &SceneRoot), With<Car>>,
    mut reported: Local<[bool; 2]>,
) {
    for (player, root) in &cars {
        if reported[player.index()] {
            continue;
        }
        if let LoadState::Failed(err) = asset_server.load_state(&root.0) {
            warn!("{} car model failed to load: {}", player.label(), err);
            reported[player.index()] = true;
        }
    }
}

pub fn step_players(
    mut session: ResMut<RaceSession>,
    inputs: Res<PlayerInputs>,
    config: Res<RaceConfig>,
) {
    for player in PlayerId::ALL {
        let lane_before = session.state(player).lane;
        if !session.step(player, inputs.get(player), &config.tuning) {
            continue;
        }

        let lane = session.state(player).lane;
        if lane != lane_before {
            debug!("{} moved to lane {}", player.label(), lane.index());
        }
    }
}

pub fn move_cars(
    session: Res<RaceSession>,
    config: Res<RaceConfig>,
    mut cars: Query<&mut Transform, With<Car>>,
) {
    for player in PlayerId::ALL {
        let Some(car) = session.car(player) else {
            continue;
        };
        let Ok(mut transform) = cars.get_mut(car) else {
            continue;
        };
        transform.translation =
            car_translation(transform.translation, session.state(player), &config.tuning);
    }
}
