pub mod app;
pub mod camera;
pub mod cli;
pub mod frame;
pub mod input;
pub mod math;
pub mod renderer;
pub mod transform;
pub mod types;

pub use camera::{Camera, Projection};
pub use math::{Mat4, Quat, Vec3};
pub use transform::{RotationMode, TransformAccumulator};
