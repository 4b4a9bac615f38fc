use bevy::prelude::*;
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use crate::config::RaceConfig;
use crate::game_logic::{
    road_offset, segment_detail, segment_indices, segment_z, RoadGroup, RoadSegment,
    SegmentDetail,
};

const ROAD_TEXTURE: &str = "road_texture.jpg";
const ROAD_NORMAL: &str = "road_normal.jpg";

fn repeating(settings: &mut ImageLoaderSettings) {
    settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..default()
    });
}

// Builds the whole road once; it never grows or shrinks, only scrolls.
pub fn spawn_road(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<RaceConfig>,
) {
    let layout = &config.road;

    let texture: Handle<Image> = asset_server.load_with_settings(ROAD_TEXTURE, repeating);
    let normal: Handle<Image> =
        asset_server.load_with_settings(ROAD_NORMAL, |settings: &mut ImageLoaderSettings| {
            repeating(settings);
            settings.is_srgb = false;
        });

    let high = materials.add(StandardMaterial {
        base_color_texture: Some(texture.clone()),
        normal_map_texture: Some(normal),
        perceptual_roughness: 0.9,
        metallic: 0.1,
        uv_transform: Affine2::from_scale(Vec2::new(1.0, 8.0)),
        ..default()
    });
    let low = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 0.9,
        metallic: 0.1,
        uv_transform: Affine2::from_scale(Vec2::new(1.0, 2.0)),
        ..default()
    });

    let plane = Plane3d::default()
        .mesh()
        .size(layout.width, layout.segment_length)
        .build();
    let plane = match plane.clone().with_generated_tangents() {
        Ok(mesh) => mesh,
        Err(err) => {
            warn!("Road normal map disabled, tangents failed: {err}");
            plane
        }
    };
    let segment_mesh = meshes.add(plane);

    let mut high_count = 0;
    commands
        .spawn((RoadGroup, Transform::default(), Visibility::default()))
        .with_children(|road| {
            for index in segment_indices(layout) {
                let material = match segment_detail(index, layout) {
                    SegmentDetail::High => {
                        high_count += 1;
                        high.clone()
                    }
                    SegmentDetail::Low => low.clone(),
                };
                road.spawn((
                    Mesh3d(segment_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_xyz(0.0, 0.0, segment_z(index, layout)),
                    RoadSegment,
                ));
            }
        });

    info!(
        "Spawned {} road segments ({} high detail)",
        segment_indices(layout).len(),
        high_count
    );
}

pub fn scroll_road(
    time: Res<Time>,
    config: Res<RaceConfig>,
    mut road: Query<&mut Transform, With<RoadGroup>>,
) {
    let offset = road_offset(time.elapsed_secs_f64(), &config.road);
    for mut transform in &mut road {
        transform.translation.z = offset;
    }
}
