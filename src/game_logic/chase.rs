use bevy::prelude::*;
use crate::config::CameraTuning;

/// Next pose of a chase camera: ease toward a point behind and above the
/// car, then look at a point ahead of it.
pub fn chase_camera(current: &Transform, car: Vec3, tuning: &CameraTuning) -> Transform {
    let ideal = Vec3::new(car.x, tuning.height, car.z + tuning.distance);
    let position = current.translation.lerp(ideal, tuning.blend);
    Transform::from_translation(position).looking_at(car + tuning.look_ahead, Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_blends() {
        let tuning = CameraTuning::default();
        let car = Vec3::new(8.0, 0.0, -100.0);
        let next = chase_camera(&Transform::default(), car, &tuning);

        let ideal = Vec3::new(8.0, tuning.height, -100.0 + tuning.distance);
        let expected = ideal * tuning.blend;
        assert!(next.translation.distance(expected) < 1e-4);
    }

    #[test]
    fn test_settles_behind_and_above() {
        let tuning = CameraTuning::default();
        let car = Vec3::new(-8.0, 0.0, -50.0);
        let mut camera = Transform::default();
        for _ in 0..500 {
            camera = chase_camera(&camera, car, &tuning);
        }

        assert!((camera.translation.x - car.x).abs() < 1e-3);
        assert!((camera.translation.y - tuning.height).abs() < 1e-3);
        assert!((camera.translation.z - (car.z + tuning.distance)).abs() < 1e-3);

        // facing down the road
        assert!(camera.forward().z < 0.0);
    }

    #[test]
    fn test_lags_behind_moving_car() {
        let tuning = CameraTuning::default();
        let mut camera = Transform::from_xyz(0.0, tuning.height, tuning.distance);
        let mut car = Vec3::ZERO;
        for _ in 0..100 {
            car.z -= 5.0;
            camera = chase_camera(&camera, car, &tuning);
        }
        // trails further than the rigid offset
        assert!(camera.translation.z - car.z > tuning.distance);
    }
}
