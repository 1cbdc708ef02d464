use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freefly::camera::Camera;
use freefly::input::InputSnapshot;
use freefly::math::{Mat4, Vec3};
use freefly::transform::{RotationMode, TransformAccumulator};

/// Benchmark: 4x4 matrix multiply, the innermost per-frame operation
fn bench_mat4_multiply(c: &mut Criterion) {
    let a = Mat4::from_rotation_y(0.7) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let b = Mat4::from_rotation_x(-0.4) * Mat4::from_scale(Vec3::splat(1.5));

    c.bench_function("mat4_multiply", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
}

/// Benchmark: camera basis rebuild from a look delta
fn bench_camera_update_direction(c: &mut Criterion) {
    let mut camera = Camera::new();

    c.bench_function("camera_update_direction", |bench| {
        bench.iter(|| {
            camera.update_direction(black_box(1.3), black_box(-0.8));
            black_box(camera.front())
        })
    });
}

/// Benchmark: full per-frame transform step plus model matrix derivation
fn bench_transform_step(c: &mut Criterion) {
    for (name, mode) in [
        ("transform_step_euler", RotationMode::Euler),
        ("transform_step_quaternion", RotationMode::Quaternion),
    ] {
        let mut transform = TransformAccumulator::new(mode);
        let snapshot = InputSnapshot {
            rotate_y_pos: true,
            scale_up: true,
            ..Default::default()
        };

        c.bench_function(name, |bench| {
            bench.iter(|| {
                transform.update(black_box(&snapshot), black_box(1.0 / 60.0));
                black_box(transform.model_matrix())
            })
        });
    }
}

criterion_group!(
    benches,
    bench_mat4_multiply,
    bench_camera_update_direction,
    bench_transform_step
);
criterion_main!(benches);
