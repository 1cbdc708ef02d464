// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};

use crate::transform::RotationMode;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationArg {
    /// Accumulate raw rotation matrices (drifts over long sessions)
    Euler,
    /// Accumulate a renormalized unit quaternion (drift-free)
    Quaternion,
}

impl From<RotationArg> for RotationMode {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Euler => RotationMode::Euler,
            RotationArg::Quaternion => RotationMode::Quaternion,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "freefly")]
#[command(about = "Free-fly camera over a spinning cube", long_about = None)]
pub struct Cli {
    /// Rotation accumulation backend
    #[arg(long = "rotation", value_enum, default_value = "quaternion")]
    pub rotation: RotationArg,

    /// Disable the per-axis idle animations
    #[arg(long = "no-idle", default_value = "false")]
    pub no_idle: bool,
}
