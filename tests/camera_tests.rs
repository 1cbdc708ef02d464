use freefly::camera::{Camera, WORLD_UP};
use freefly::math::{Mat4, Vec3};

const EPS: f32 = 1e-4;

fn assert_orthonormal(camera: &Camera) {
    let (f, r, u) = (camera.front(), camera.right(), camera.up());
    assert!((f.length() - 1.0).abs() < EPS, "front not unit: {:?}", f);
    assert!((r.length() - 1.0).abs() < EPS, "right not unit: {:?}", r);
    assert!((u.length() - 1.0).abs() < EPS, "up not unit: {:?}", u);
    assert!(f.dot(r).abs() < EPS, "front/right not orthogonal");
    assert!(f.dot(u).abs() < EPS, "front/up not orthogonal");
    assert!(r.dot(u).abs() < EPS, "right/up not orthogonal");
    // Right-handed: right x up points backwards, opposite the view direction.
    assert!((r.cross(u) + f).length() < EPS * 10.0);
}

#[test]
fn test_basis_stays_orthonormal_under_look_input() {
    let mut camera = Camera::new();
    assert_orthonormal(&camera);

    // A messy but deterministic stream of look deltas, including large ones
    // that slam into the pitch clamp.
    let mut seed = 1u32;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let dx = ((seed >> 16) as f32 / 655.36) - 50.0;
        let dy = ((seed & 0xffff) as f32 / 655.36) - 50.0;
        camera.update_direction(dx, dy * 3.0);
        assert_orthonormal(&camera);
    }
}

#[test]
fn test_pitch_never_escapes_clamp() {
    let mut camera = Camera::new();
    for _ in 0..200 {
        camera.update_direction(13.0, 5_000.0);
        assert!(camera.pitch <= 89.0);
    }
    assert_eq!(camera.pitch, 89.0);
    for _ in 0..200 {
        camera.update_direction(-7.0, -9_999.0);
        assert!(camera.pitch >= -89.0);
    }
    assert_eq!(camera.pitch, -89.0);
}

#[test]
fn test_default_view_matches_look_at() {
    // Camera at the origin, default orientation, no-op look update.
    let mut camera = Camera::new();
    camera.position = Vec3::ZERO;
    camera.update_direction(0.0, 0.0);

    let view = camera.view_matrix();
    let reference = Mat4::look_at(Vec3::ZERO, Vec3::ZERO + camera.front(), WORLD_UP);
    for (a, b) in view.m.iter().zip(reference.m.iter()) {
        assert!((a - b).abs() < EPS);
    }
}

#[test]
fn test_view_matrix_is_pure() {
    let camera = Camera::new();
    let v1 = camera.view_matrix();
    let v2 = camera.view_matrix();
    assert_eq!(v1.m, v2.m);
    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
}

#[test]
fn test_forward_movement_follows_front() {
    let mut camera = Camera::new();
    camera.update_direction(450.0, 100.0); // arbitrary look direction
    let front = camera.front();
    let start = camera.position;

    let snapshot = freefly::input::InputSnapshot {
        move_forward: true,
        ..Default::default()
    };
    camera.process_movement(&snapshot, 0.5);

    let moved = camera.position - start;
    assert!((moved - front * (camera.speed * 0.5)).length() < EPS);
}

#[test]
fn test_vertical_flight_is_world_aligned() {
    let mut camera = Camera::new();
    camera.update_direction(0.0, 600.0); // pitch up steeply
    let start = camera.position;

    let snapshot = freefly::input::InputSnapshot {
        fly_up: true,
        ..Default::default()
    };
    camera.process_movement(&snapshot, 1.0);

    // Vertical flight is along world up, regardless of pitch.
    let moved = camera.position - start;
    assert!((moved - WORLD_UP * camera.speed).length() < EPS);
}

#[test]
fn test_look_before_any_update_has_valid_basis() {
    let camera = Camera::new();
    assert_orthonormal(&camera);
    assert_eq!(camera.front(), -Vec3::Z);
}
