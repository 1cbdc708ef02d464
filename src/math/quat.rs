use std::ops::Mul;

use super::mat4::Mat4;
use super::vec3::Vec3;

/// Unit quaternion, scalar-first (w, x, y, z).
///
/// Incremental orientation updates renormalize after every multiply, so the
/// unit-magnitude invariant holds at every observation point and rotation
/// drift stays bounded over arbitrarily long sessions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Rotation of `radians` about a unit `axis`.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Quat {
        debug_assert!(
            (axis.length_squared() - 1.0).abs() < 1e-4,
            "from_axis_angle() requires a unit axis"
        );
        let (s, c) = (radians * 0.5).sin_cos();
        Quat {
            w: c,
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    pub fn dot(self, rhs: Quat) -> f32 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Quat {
        let len = self.length();
        debug_assert!(len > 1e-6, "normalize() on near-zero quaternion");
        let inv = 1.0 / len;
        Quat {
            w: self.w * inv,
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
        }
    }

    /// Equivalent rotation matrix. Assumes `self` is unit length.
    pub fn to_mat4(self) -> Mat4 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Mat4 {
            m: [
                1.0 - yy - zz,
                xy + wz,
                xz - wy,
                0.0,
                //
                xy - wz,
                1.0 - xx - zz,
                yz + wx,
                0.0,
                //
                xz + wy,
                yz - wx,
                1.0 - xx - yy,
                0.0,
                //
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }
}

impl Mul for Quat {
    type Output = Quat;

    /// Hamilton product; `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}
