//! Movement model for a single tank in a top-down battle game.
//!
//! The [`Tank`](common::tank::Tank) holds the kinematic state and is driven by
//! start/stop commands plus [`on_time_passes`](common::tank::Tank::on_time_passes).
//! Rendering, input and the game loop live outside this crate.

pub mod common;
pub mod utils;

pub use common::error::{ConfigError, TankError};
pub use common::tank::{MotionDirection, RotationDirection, Tank, TankSnapshot};
pub use common::tuning::TankTuning;
pub use utils::Vector2;
