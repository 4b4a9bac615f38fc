use bevy::prelude::*;
use crate::config::{RaceConfig, TrafficLayout};
use crate::game_logic::BackgroundTraffic;
use rand::Rng;

/// Scattered placements down the road ahead of the start line.
pub fn traffic_transforms(layout: &TrafficLayout, rng: &mut impl Rng) -> Vec<Transform> {
    (0..layout.count)
        .map(|i| {
            let x = rng.random_range(-1.0..1.0) * layout.spread;
            let z = layout.start_z - i as f32 * layout.spacing;
            let scale = rng.random_range(layout.min_scale..=layout.max_scale);
            Transform::from_xyz(x, 1.0, z).with_scale(Vec3::splat(scale))
        })
        .collect()
}

// Every box shares one mesh and one material, so the renderer batches them
// into instanced draws. They are scenery and are never simulated.
pub fn spawn_traffic(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<RaceConfig>,
) {
    let layout = &config.traffic;
    let size = layout.size;
    let mesh = meshes.add(Cuboid::new(size.x, size.y, size.z));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x66, 0x66, 0x66),
        ..default()
    });

    let mut rng = rand::rng();
    for transform in traffic_transforms(layout, &mut rng) {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            transform,
            BackgroundTraffic,
        ));
    }
}
