//! Up front configuration values

/// Top speed of the Tank in world units per second
pub const SPEED_MAX: f64 = 100.0;
/// Speed of the Tank while it is also turning its body
pub const SPEED_WHILE_TURNING: f64 = 80.0;

/// Body turn rate in degrees per second when turning on the spot
pub const BODY_TURN_RATE_MAX: f64 = 45.0;
/// Body turn rate in degrees per second while driving
pub const BODY_TURN_RATE_WHILE_DRIVING: f64 = 22.5;
/// Turret turn rate in degrees per second
pub const TURRET_TURN_RATE_MAX: f64 = 90.0;

/// Longest slice of time integrated in one go, in seconds
pub const MAX_SUBSTEP: f64 = 0.01;

// Headings in degrees. The y axis points down the screen,
// so a positive turn is clockwise.
pub const EAST: f64 = 0.0;
pub const SOUTH: f64 = 90.0;
pub const WEST: f64 = 180.0;
pub const NORTH: f64 = 270.0;

/// Smallest sub-step a tuning may ask for, in seconds
pub const MIN_SUBSTEP: f64 = 1e-6;
/// Most sub-steps a single call to `on_time_passes` will integrate
pub const MAX_SUBSTEPS: u64 = 10_000_000;
