use freefly::math::{Mat4, Quat, Vec3};

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn mat_approx(a: &Mat4, b: &[f32; 16]) -> bool {
    a.m.iter().zip(b.iter()).all(|(x, y)| approx(*x, *y))
}

#[test]
fn test_normalize_has_unit_magnitude() {
    let vectors = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-0.001, 0.002, 0.004),
        Vec3::new(1e4, -2e4, 3e4),
    ];
    for v in vectors {
        assert!(approx(v.normalize().length(), 1.0), "{:?}", v);
    }
}

#[test]
fn test_dot_symmetric_cross_antisymmetric() {
    let pairs = [
        (Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)),
        (Vec3::new(-1.0, 0.5, 2.0), Vec3::new(0.0, -3.0, 1.0)),
        (Vec3::X, Vec3::Y),
    ];
    for (a, b) in pairs {
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -(b.cross(a)));
    }
}

#[test]
fn test_identity_is_multiplicative_unit() {
    let matrices = [
        Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0)),
        Mat4::from_rotation_x(0.7) * Mat4::from_rotation_y(1.1),
        Mat4::perspective(1.0, 1.5, 0.1, 100.0),
    ];
    for m in matrices {
        assert!(mat_approx(&(Mat4::IDENTITY * m), &m.m));
        assert!(mat_approx(&(m * Mat4::IDENTITY), &m.m));
    }
}

#[test]
fn test_rotation_y_quarter_turn_sends_x_to_negative_z() {
    let m = Mat4::from_rotation_y(90f32.to_radians());
    let v = m.transform_point(Vec3::X);
    assert!(approx(v.x, 0.0));
    assert!(approx(v.y, 0.0));
    assert!(approx(v.z, -1.0));
}

#[test]
fn test_model_composition_scales_rotates_then_translates() {
    let model = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))
        * Mat4::from_rotation_z(90f32.to_radians())
        * Mat4::from_scale(Vec3::splat(2.0));
    // (1, 0, 0) -> scaled (2, 0, 0) -> rotated (0, 2, 0) -> moved (5, 2, 0)
    let v = model.transform_point(Vec3::X);
    assert!(approx(v.x, 5.0));
    assert!(approx(v.y, 2.0));
    assert!(approx(v.z, 0.0));
}

#[test]
fn test_perspective_parameters_invert() {
    let fovy = 45f32.to_radians();
    let aspect = 1280.0 / 720.0;
    let m = Mat4::perspective(fovy, aspect, 0.1, 100.0);

    // m[1][1] = 1 / tan(fovy / 2), m[0][0] = m[1][1] / aspect.
    let recovered_fovy = 2.0 * (1.0 / m.get(1, 1)).atan();
    let recovered_aspect = m.get(1, 1) / m.get(0, 0);
    assert!(approx(recovered_fovy, fovy));
    assert!(approx(recovered_aspect, aspect));
}

#[test]
fn test_quaternion_matches_matrix_composition() {
    let q = Quat::from_axis_angle(Vec3::Y, 0.4) * Quat::from_axis_angle(Vec3::X, 0.9);
    let m = Mat4::from_rotation_y(0.4) * Mat4::from_rotation_x(0.9);
    let p = Vec3::new(0.3, -1.2, 2.0);
    let qv = q.to_mat4().transform_point(p);
    let mv = m.transform_point(p);
    assert!((qv - mv).length() < EPS);
}

// Cross-checks against glam's reference implementations.

fn glam_approx(ours: &Mat4, reference: glam::Mat4) -> bool {
    ours.m
        .iter()
        .zip(reference.to_cols_array().iter())
        .all(|(a, b)| (a - b).abs() < EPS)
}

#[test]
fn test_perspective_matches_glam() {
    let ours = Mat4::perspective(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    let reference = glam::Mat4::perspective_rh(45f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    assert!(glam_approx(&ours, reference));
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let target = Vec3::new(-4.0, 0.0, 1.0);
    let ours = Mat4::look_at(eye, target, Vec3::Y);
    let reference = glam::Mat4::look_at_rh(
        glam::Vec3::from_array(eye.to_array()),
        glam::Vec3::from_array(target.to_array()),
        glam::Vec3::Y,
    );
    assert!(glam_approx(&ours, reference));
}

#[test]
fn test_axis_angle_matches_glam() {
    let axis = Vec3::new(1.0, 2.0, -0.5).normalize();
    let ours = Mat4::from_axis_angle(axis, 1.3);
    let reference = glam::Mat4::from_axis_angle(glam::Vec3::from_array(axis.to_array()), 1.3);
    assert!(glam_approx(&ours, reference));
}

#[test]
fn test_rotation_transpose_is_inverse() {
    // Rotation matrices are orthogonal, so R * R^T is the identity.
    let r = Mat4::from_axis_angle(Vec3::new(0.5, -1.0, 2.0).normalize(), 1.9)
        * Mat4::from_rotation_y(0.3);
    assert!(mat_approx(&(r * r.transpose()), &Mat4::IDENTITY.m));
}

#[test]
fn test_multiply_matches_glam() {
    let a = Mat4::from_rotation_x(0.6) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let b = Mat4::from_rotation_z(-1.2) * Mat4::from_scale(Vec3::new(2.0, 0.5, 1.5));
    let ga = glam::Mat4::from_cols_array(&a.m);
    let gb = glam::Mat4::from_cols_array(&b.m);
    assert!(glam_approx(&(a * b), ga * gb));
}
