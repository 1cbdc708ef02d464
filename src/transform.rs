use crate::input::InputSnapshot;
use crate::math::{Mat4, Quat, Vec3};

pub const ROTATE_RATE: f32 = 1.5; // radians per second under key input
pub const IDLE_SPIN_RATE: f32 = 0.6;
pub const MOVE_RATE: f32 = 1.5;
pub const SCALE_RATE: f32 = 0.5;
pub const MIN_SCALE: f32 = 0.1;

const BOB_AMPLITUDE: f32 = 0.25;
const BOB_RATE: f32 = 1.2;
const PULSE_AMPLITUDE: f32 = 0.15;
const PULSE_RATE: f32 = 2.0;

/// How incremental rotation is accumulated across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Raw matrix products, right-multiplied every frame. Accumulates
    /// floating-point error: over very long sessions the basis drifts
    /// visibly out of orthonormality. Kept as the faithful rendition of the
    /// original demo variant.
    Euler,
    /// Unit quaternion, renormalized after every multiply. Drift-free.
    Quaternion,
}

/// Accumulated orientation, one variant per [`RotationMode`].
#[derive(Debug, Clone, Copy)]
enum Orientation {
    Euler(Mat4),
    Quaternion(Quat),
}

impl Orientation {
    /// Right-multiply an axis-angle delta: the rotation happens about the
    /// object's own axes, and the accumulation order is the same every
    /// frame. Reordering this product changes the final orientation.
    fn rotate(&mut self, axis: Vec3, radians: f32) {
        // A zero angle must leave the orientation bit-for-bit unchanged;
        // renormalizing an already-unit quaternion would still perturb it.
        if radians == 0.0 {
            return;
        }
        match self {
            Orientation::Euler(m) => *m = *m * Mat4::from_axis_angle(axis, radians),
            Orientation::Quaternion(q) => {
                *q = (*q * Quat::from_axis_angle(axis, radians)).normalize()
            }
        }
    }

    fn matrix(&self) -> Mat4 {
        match self {
            Orientation::Euler(m) => *m,
            Orientation::Quaternion(q) => q.to_mat4(),
        }
    }
}

/// One object's pose, stepped once per frame.
///
/// Each degree of freedom (rotation, translation, scale) is driven by its
/// input when present and falls back to a deterministic idle animation when
/// not — independently per frame, so rotation can idle while translation is
/// user-driven. All idle terms are functions of accumulated time, so a frame
/// with `dt == 0` changes nothing.
pub struct TransformAccumulator {
    pub position: Vec3,
    pub scale: f32,
    orientation: Orientation,
    total_time: f32,
    bob: f32,
    pulse: f32,
    idle_enabled: bool,
}

impl TransformAccumulator {
    pub fn new(mode: RotationMode) -> Self {
        let orientation = match mode {
            RotationMode::Euler => Orientation::Euler(Mat4::IDENTITY),
            RotationMode::Quaternion => Orientation::Quaternion(Quat::IDENTITY),
        };
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            orientation,
            total_time: 0.0,
            bob: 0.0,
            pulse: 0.0,
            idle_enabled: true,
        }
    }

    pub fn with_idle(mode: RotationMode, idle_enabled: bool) -> Self {
        Self {
            idle_enabled,
            ..Self::new(mode)
        }
    }

    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Scale actually applied to the model this frame: the accumulated user
    /// scale plus the idle pulse, clamped below so geometry never inverts.
    pub fn effective_scale(&self) -> f32 {
        (self.scale + self.pulse).max(MIN_SCALE)
    }

    /// Step the pose by one frame from an input snapshot and elapsed time.
    pub fn update(&mut self, snapshot: &InputSnapshot, dt: f32) {
        // No elapsed time, no movement: every user delta below scales with
        // dt, and the idle terms may not be re-evaluated either, or the
        // frame after an input-to-idle transition would jump the bob and
        // pulse offsets out of their suppressed values.
        if dt == 0.0 {
            return;
        }
        self.total_time += dt;

        // Rotation: axis inputs, else idle spin about +Y.
        if snapshot.any_rotation() {
            let rx = snapshot.rotate_x_axis();
            let ry = snapshot.rotate_y_axis();
            if rx != 0.0 {
                self.orientation.rotate(Vec3::X, rx * ROTATE_RATE * dt);
            }
            if ry != 0.0 {
                self.orientation.rotate(Vec3::Y, ry * ROTATE_RATE * dt);
            }
        } else if self.idle_enabled {
            self.orientation.rotate(Vec3::Y, IDLE_SPIN_RATE * dt);
        }

        // Translation: XZ-plane slide, else idle vertical bob.
        if snapshot.any_translation() {
            let (forward, right) = snapshot.slide_axes();
            self.position += Vec3::new(right, 0.0, -forward) * (MOVE_RATE * dt);
        } else if self.idle_enabled {
            self.bob = BOB_AMPLITUDE * (BOB_RATE * self.total_time).sin();
        }

        // Scale: bounded accumulation, else idle pulse.
        if snapshot.any_scale() {
            self.pulse = 0.0;
            self.scale = (self.scale + snapshot.scale_axis() * SCALE_RATE * dt).max(MIN_SCALE);
        } else if self.idle_enabled {
            self.pulse = PULSE_AMPLITUDE * (PULSE_RATE * self.total_time).sin();
        }
    }

    /// Accumulated rotation as a matrix.
    pub fn rotation_matrix(&self) -> Mat4 {
        self.orientation.matrix()
    }

    /// Model matrix: translation applied last, so the object is scaled,
    /// rotated about its own origin, then moved to its world position.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position + Vec3::Y * self.bob)
            * self.orientation.matrix()
            * Mat4::from_scale(Vec3::splat(self.effective_scale()))
    }
}
