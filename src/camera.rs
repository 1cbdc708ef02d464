use crate::input::InputSnapshot;
use crate::math::{Mat4, Vec3};

pub const WORLD_UP: Vec3 = Vec3::Y;

pub const MOUSE_SENSITIVITY: f32 = 0.1;
pub const CAMERA_SPEED: f32 = 2.5;
const PITCH_LIMIT: f32 = 89.0;

/// Free-flying camera: position plus yaw/pitch look angles in degrees.
///
/// The front/right/up basis is cached and recomputed only by
/// `update_direction`, so strafing always follows the basis from the last
/// look update. The basis is right-handed and orthonormal at all times; the
/// pitch clamp keeps `front` away from the world-up pole so the cross
/// products below never degenerate.
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    pub sensitivity: f32,
    pub speed: f32,
}

impl Camera {
    /// Camera at (0, 0, 3) facing down -Z, the demo's starting pose.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            front: -Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            sensitivity: MOUSE_SENSITIVITY,
            speed: CAMERA_SPEED,
        }
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply raw look deltas (pointer movement), then rebuild the basis.
    ///
    /// Order matters: front from the spherical angles first, then right from
    /// front x world-up, then up from right x front. Deriving up from a stale
    /// right vector would let the basis drift out of orthogonality.
    pub fn update_direction(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta * self.sensitivity;
        self.pitch += pitch_delta * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Consume one frame's look input. Deltas only steer while the
    /// mouse-look gate is held; vertical pointer motion is inverted so that
    /// dragging up looks up.
    pub fn process_look(&mut self, snapshot: &InputSnapshot) {
        if snapshot.look_enabled {
            let (dx, dy) = snapshot.mouse_delta;
            self.update_direction(dx, -dy);
        }
    }

    /// Consume one frame's movement input. Strafing uses the cached right
    /// vector; vertical flight is along world up, not the camera's up.
    pub fn process_movement(&mut self, snapshot: &InputSnapshot, dt: f32) {
        let (forward, strafe, vertical) = snapshot.camera_axes();
        let step = self.speed * dt;
        self.position += self.front * (forward * step)
            + self.right * (strafe * step)
            + WORLD_UP * (vertical * step);
    }

    /// View matrix for the current pose. Pure derivation, no mutation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective projection parameters. The matrix is rebuilt from the stored
/// parameters on every query; `resize` keeps the aspect ratio in step with
/// the surface so the projection is never stale across a resize.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fovy_degrees: 45.0,
            aspect: width as f32 / height as f32,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Caller guarantees positive dimensions (winit never reports zero for a
    /// visible surface; the app skips resize events that would).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fovy_degrees.to_radians(), self.aspect, self.znear, self.zfar)
    }
}
