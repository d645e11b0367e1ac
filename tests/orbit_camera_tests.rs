use glam::Vec3;

use brdf_viewer::camera::{OrbitCamera, DOLLY_FAR, DOLLY_NEAR};
use brdf_viewer::math::to_lat_long;

fn distance_to_dest(camera: &OrbitCamera) -> f32 {
    (camera.position.dest - camera.position.curr).length()
}

fn orbit_distance(camera: &OrbitCamera) -> f32 {
    (camera.position.dest - camera.target.dest).length()
}

#[cfg(test)]
mod convergence_tests {
    use super::*;

    #[test]
    fn test_update_converges_without_overshoot() {
        let mut camera = OrbitCamera::new();
        camera.dolly(2.0); // push the destination away from current

        let mut prev = distance_to_dest(&camera);
        assert!(prev > 0.0, "dolly should have displaced the destination");

        let mut iterations = 0;
        while prev > 1e-4 {
            camera.update(0.016);
            let next = distance_to_dest(&camera);
            assert!(
                next < prev,
                "distance to destination should strictly decrease: {} -> {}",
                prev,
                next
            );
            prev = next;
            iterations += 1;
            assert!(iterations < 10_000, "camera failed to converge");
        }
    }

    #[test]
    fn test_large_dt_snaps_to_destination_without_overshoot() {
        let mut camera = OrbitCamera::new();
        camera.dolly(1.5);
        let dest = camera.position.dest;

        // dt well past the smoothing constant caps the blend at 1.0.
        camera.update(10.0);
        assert!(
            (camera.position.curr - dest).length() < 1e-5,
            "a capped blend should land exactly on the destination"
        );
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut camera = OrbitCamera::new();
        camera.dolly(1.0);
        let before = camera.position.curr;
        camera.update(0.0);
        assert_eq!(camera.position.curr, before);
    }
}

#[cfg(test)]
mod dolly_tests {
    use super::*;

    #[test]
    fn test_dolly_out_never_exceeds_far_bound() {
        let mut camera = OrbitCamera::new();
        for _ in 0..500 {
            camera.dolly(0.5);
            assert!(
                orbit_distance(&camera) <= DOLLY_FAR + 1e-3,
                "distance {} exceeded far bound",
                orbit_distance(&camera)
            );
        }
    }

    #[test]
    fn test_dolly_in_never_passes_near_bound() {
        let mut camera = OrbitCamera::new();
        for _ in 0..500 {
            camera.dolly(-0.5);
            assert!(
                orbit_distance(&camera) >= DOLLY_NEAR - 1e-3,
                "distance {} passed near bound",
                orbit_distance(&camera)
            );
        }
    }

    #[test]
    fn test_dolly_in_then_update_moves_closer_along_axis() {
        // Initial pose: position (0,0,-3), target at the origin.
        let mut camera = OrbitCamera::new();
        camera.dolly(-0.1);
        camera.update(1.0);

        let distance = (camera.position.curr - camera.target.curr).length();
        assert!(
            distance < 3.0,
            "dolly(-0.1) should move the camera closer, got {}",
            distance
        );
        assert!(distance >= DOLLY_NEAR, "distance must stay above the near bound");

        // Motion stays on the original view axis.
        assert!(camera.position.curr.x.abs() < 1e-5);
        assert!(camera.position.curr.y.abs() < 1e-5);
        assert!(camera.position.curr.z < 0.0);
    }

    #[test]
    fn test_rejected_dolly_leaves_destination_unchanged() {
        let mut camera = OrbitCamera::new();
        // Drive in until a further dolly-in would cross the near bound.
        for _ in 0..200 {
            camera.dolly(-0.5);
        }
        let at_bound = camera.position.dest;
        camera.dolly(-0.5);
        assert_eq!(camera.position.dest, at_bound);
    }
}

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_no_pending_orbit_preserves_direction() {
        let mut camera = OrbitCamera::new();
        let before = (camera.position.curr - camera.target.curr).normalize();

        for _ in 0..50 {
            camera.update(0.016);
        }

        let after = (camera.position.curr - camera.target.curr).normalize();
        assert!(
            (after - before).length() < 1e-4,
            "direction drifted without orbit input: {:?} -> {:?}",
            before,
            after
        );
    }

    #[test]
    fn test_extreme_pitch_is_clamped_away_from_poles() {
        for dy in [1000.0_f32, -1000.0] {
            let mut camera = OrbitCamera::new();
            camera.orbit(0.0, dy);
            for _ in 0..200 {
                camera.update(0.1);
            }

            let dir = (camera.position.curr - camera.target.curr).normalize();
            let (_, lat) = to_lat_long(dir);
            assert!(
                (0.02 - 1e-3..=0.98 + 1e-3).contains(&lat),
                "latitude {} escaped the clamp for dy={}",
                lat,
                dy
            );
        }
    }

    #[test]
    fn test_extreme_yaw_keeps_orbit_radius() {
        let mut camera = OrbitCamera::new();
        let radius = (camera.position.curr - camera.target.curr).length();

        camera.orbit(1000.0, 0.0);
        for _ in 0..200 {
            camera.update(0.1);
        }

        let after = (camera.position.curr - camera.target.curr).length();
        assert!(
            (after - radius).abs() < 0.05,
            "orbiting should not change the radius: {} -> {}",
            radius,
            after
        );
    }

    #[test]
    fn test_orbit_shifts_destination_with_current() {
        // Orbiting pans the settled destination too, so the camera does not
        // spring back once the accumulator drains.
        let mut camera = OrbitCamera::new();
        camera.orbit(0.25, 0.0);
        camera.update(1.0);

        let settled = camera.position.dest;
        for _ in 0..100 {
            camera.update(0.1);
        }
        assert!(
            (camera.position.curr - settled).length() < 0.05,
            "camera sprang back after orbiting"
        );
    }

    #[test]
    fn test_reset_restores_initial_pose() {
        let mut camera = OrbitCamera::new();
        camera.orbit(3.0, 1.0);
        camera.dolly(0.5);
        camera.update(1.0);
        camera.reset();

        assert_eq!(camera.position.curr, Vec3::new(0.0, 0.0, -3.0));
        assert_eq!(camera.target.curr, Vec3::ZERO);
    }
}
