use std::ops::Mul;

use super::vec3::Vec3;

/// 4x4 homogeneous transform matrix.
///
/// Storage is **column-major**: element (row `r`, column `c`) lives at
/// `m[c * 4 + r]`, the layout a WGSL `mat4x4<f32>` uniform expects. Vectors
/// are column vectors, so `M * v` applies `M` to `v` and the left operand of
/// a product is applied last to a point:
///
/// - model = translation * rotation * scale
/// - clip  = projection * view * model * point
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    pub m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[col * 4 + row]
    }

    pub fn from_scale(scale: Vec3) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        m.m[0] = scale.x;
        m.m[5] = scale.y;
        m.m[10] = scale.z;
        m
    }

    pub fn from_translation(t: Vec3) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        m.m[12] = t.x;
        m.m[13] = t.y;
        m.m[14] = t.z;
        m
    }

    pub fn from_rotation_x(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        let mut m = Mat4::IDENTITY;
        m.m[5] = c;
        m.m[6] = s;
        m.m[9] = -s;
        m.m[10] = c;
        m
    }

    pub fn from_rotation_y(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        let mut m = Mat4::IDENTITY;
        m.m[0] = c;
        m.m[2] = -s;
        m.m[8] = s;
        m.m[10] = c;
        m
    }

    pub fn from_rotation_z(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        let mut m = Mat4::IDENTITY;
        m.m[0] = c;
        m.m[1] = s;
        m.m[4] = -s;
        m.m[5] = c;
        m
    }

    /// Rotation about an arbitrary unit axis (Rodrigues form). A positive
    /// angle is a right-handed rotation about the axis.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Mat4 {
        debug_assert!(
            (axis.length_squared() - 1.0).abs() < 1e-4,
            "from_axis_angle() requires a unit axis"
        );
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Mat4 {
            m: [
                c + x * x * t,
                x * y * t + z * s,
                x * z * t - y * s,
                0.0,
                //
                x * y * t - z * s,
                c + y * y * t,
                y * z * t + x * s,
                0.0,
                //
                x * z * t + y * s,
                y * z * t - x * s,
                c + z * z * t,
                0.0,
                //
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Right-handed perspective projection with wgpu clip space (depth 0..1).
    ///
    /// Precondition, guarded by the upstream resize handler:
    /// `fovy`, `aspect`, `znear` positive and `zfar > znear`.
    pub fn perspective(fovy_radians: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        debug_assert!(fovy_radians > 0.0 && aspect > 0.0);
        debug_assert!(znear > 0.0 && zfar > znear);
        let h = 1.0 / (fovy_radians * 0.5).tan();
        let r = zfar / (znear - zfar);

        let mut m = Mat4 { m: [0.0; 16] };
        m.m[0] = h / aspect;
        m.m[5] = h;
        m.m[10] = r;
        m.m[11] = -1.0;
        m.m[14] = r * znear;
        m
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// Precondition: `target != eye` and `up` not parallel to the view
    /// direction. The camera's pitch clamp guarantees both.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        debug_assert!((target - eye).length_squared() > 1e-12);
        let f = (target - eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(f);

        Mat4 {
            m: [
                s.x,
                u.x,
                -f.x,
                0.0,
                //
                s.y,
                u.y,
                -f.y,
                0.0,
                //
                s.z,
                u.z,
                -f.z,
                0.0,
                //
                -s.dot(eye),
                -u.dot(eye),
                f.dot(eye),
                1.0,
            ],
        }
    }

    /// Transform a point (w = 1), with perspective divide when w' != 1.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let m = &self.m;
        let x = m[0] * p.x + m[4] * p.y + m[8] * p.z + m[12];
        let y = m[1] * p.x + m[5] * p.y + m[9] * p.z + m[13];
        let z = m[2] * p.x + m[6] * p.y + m[10] * p.z + m[14];
        let w = m[3] * p.x + m[7] * p.y + m[11] * p.z + m[15];
        if (w - 1.0).abs() > 1e-6 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    pub fn transpose(&self) -> Mat4 {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = self.m[c * 4 + r];
            }
        }
        Mat4 { m: out }
    }

    /// Columns as a nested array, the shape `bytemuck` uniform PODs use.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let m = &self.m;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [0.0; 16];
        for c in 0..4 {
            for r in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.m[k * 4 + r] * rhs.m[c * 4 + k];
                }
                out[c * 4 + r] = sum;
            }
        }
        Mat4 { m: out }
    }
}

impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}
