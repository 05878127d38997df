use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

use super::{
    constants::MAX_SUBSTEPS, error::ConfigError, error::TankError, tuning::TankTuning,
};

/// Which way the hull is being driven
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionDirection {
    #[default]
    NotMoving,
    MovingForward,
    MovingBackward,
}

/// Which way the hull or the turret is being rotated
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[default]
    NotTurning,
    TurningLeft,
    TurningRight,
}

impl RotationDirection {
    /// -1 for left, 1 for right, 0 otherwise
    fn sign(self) -> f64 {
        match self {
            RotationDirection::NotTurning => 0.0,
            RotationDirection::TurningLeft => -1.0,
            RotationDirection::TurningRight => 1.0,
        }
    }
}

/// Read only view of a Tank, enough to draw it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankSnapshot {
    pub location: Vector2,
    pub body_angle: f64,
    pub turret_angle: f64,
}

/// Kinematic state of a single Tank.
///
/// The directional states are only changed by the command methods, the
/// location and angles are only changed by [`Tank::on_time_passes`].
/// Angles are in degrees and are never wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    location: Vector2,
    body_angle: f64,
    turret_angle: f64,

    motion: MotionDirection,
    body_turning: RotationDirection,
    turret_turning: RotationDirection,

    tuning: TankTuning,
}

impl Tank {
    pub fn new(
        location: Vector2,
        body_angle: f64,
        turret_angle: f64,
        motion: MotionDirection,
        body_turning: RotationDirection,
        turret_turning: RotationDirection,
    ) -> Self {
        Self {
            location,
            body_angle,
            turret_angle,
            motion,
            body_turning,
            turret_turning,
            tuning: TankTuning::default(),
        }
    }

    /// Stationary Tank with both hull and turret facing `heading`
    pub fn at(location: Vector2, heading: f64) -> Self {
        Self::new(
            location,
            heading,
            heading,
            MotionDirection::NotMoving,
            RotationDirection::NotTurning,
            RotationDirection::NotTurning,
        )
    }

    /// Replaces the rate constants, rejecting tunings the integrator can't use
    pub fn with_tuning(mut self, tuning: TankTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(self)
    }
}

/// Commands, usually issued on key down / key up
impl Tank {
    pub fn start_driving_forwards(&mut self) {
        self.motion = MotionDirection::MovingForward;
    }

    pub fn start_driving_backwards(&mut self) {
        self.motion = MotionDirection::MovingBackward;
    }

    pub fn stop_driving(&mut self) {
        self.motion = MotionDirection::NotMoving;
    }

    pub fn start_turning_left(&mut self) {
        self.body_turning = RotationDirection::TurningLeft;
    }

    pub fn start_turning_right(&mut self) {
        self.body_turning = RotationDirection::TurningRight;
    }

    pub fn stop_turning(&mut self) {
        self.body_turning = RotationDirection::NotTurning;
    }

    pub fn start_turning_turret_left(&mut self) {
        self.turret_turning = RotationDirection::TurningLeft;
    }

    pub fn start_turning_turret_right(&mut self) {
        self.turret_turning = RotationDirection::TurningRight;
    }

    pub fn stop_turret_turning(&mut self) {
        self.turret_turning = RotationDirection::NotTurning;
    }
}

/// Instantaneous rates derived from the current state
impl Tank {
    /// Units per second along the hull heading, negative when reversing.
    /// Cornering slows the Tank down.
    pub fn speed(&self) -> f64 {
        let magnitude = match self.body_turning {
            RotationDirection::NotTurning => self.tuning.speed_max,
            _ => self.tuning.speed_while_turning,
        };

        match self.motion {
            MotionDirection::NotMoving => 0.0,
            MotionDirection::MovingForward => magnitude,
            MotionDirection::MovingBackward => -magnitude,
        }
    }

    /// Degrees per second, negative when turning left.
    /// Pivoting on the spot is twice as fast as turning while driving.
    pub fn body_turn_rate(&self) -> f64 {
        let magnitude = match self.motion {
            MotionDirection::NotMoving => self.tuning.body_turn_rate_max,
            _ => self.tuning.body_turn_rate_while_driving,
        };

        self.body_turning.sign() * magnitude
    }

    /// Degrees per second, negative when turning left
    pub fn turret_turn_rate(&self) -> f64 {
        self.turret_turning.sign() * self.tuning.turret_turn_rate_max
    }
}

impl Tank {
    /// Integrates the state forward by `elapsed_time` seconds.
    ///
    /// Uses explicit Euler steps of at most `max_substep` seconds, the last
    /// step consuming whatever remains. Each step moves along the heading
    /// the hull had at the start of that step. Calls needing more than
    /// [`MAX_SUBSTEPS`] steps are rejected.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_time_passes(&mut self, elapsed_time: f64) -> Result<(), TankError> {
        if !elapsed_time.is_finite() || elapsed_time < 0.0 {
            tracing::warn!("rejecting elapsed time of {}s", elapsed_time);
            return Err(TankError::InvalidElapsedTime(elapsed_time));
        }

        // the directional state can't change during a call
        let speed = self.speed();
        let body_turn_rate = self.body_turn_rate();
        let turret_turn_rate = self.turret_turn_rate();

        let step = self.tuning.max_substep;
        let steps = (elapsed_time / step).ceil();
        if steps > MAX_SUBSTEPS as f64 {
            tracing::warn!(
                "rejecting elapsed time of {}s, needs {} sub-steps",
                elapsed_time,
                steps
            );
            return Err(TankError::TooManySubsteps {
                elapsed_time,
                substeps: steps,
            });
        }

        // counted with an integer so tiny steps can't stall on rounding
        let substeps = steps as u64;
        for i in 0..substeps {
            let dt = (elapsed_time - i as f64 * step).min(step).max(0.0);

            let heading = Vector2::from_degrees(self.body_angle);
            self.location = self.location.plus(&heading.scale(dt * speed));
            self.body_angle += dt * body_turn_rate;
            self.turret_angle += dt * turret_turn_rate;
        }

        tracing::trace!(substeps, "integrated tank movement");
        Ok(())
    }
}

/// Accessors
impl Tank {
    pub fn location(&self) -> Vector2 {
        self.location
    }

    pub fn body_angle(&self) -> f64 {
        self.body_angle
    }

    pub fn turret_angle(&self) -> f64 {
        self.turret_angle
    }

    pub fn motion(&self) -> MotionDirection {
        self.motion
    }

    pub fn body_turning(&self) -> RotationDirection {
        self.body_turning
    }

    pub fn turret_turning(&self) -> RotationDirection {
        self.turret_turning
    }

    pub fn tuning(&self) -> &TankTuning {
        &self.tuning
    }

    pub fn snapshot(&self) -> TankSnapshot {
        TankSnapshot {
            location: self.location,
            body_angle: self.body_angle,
            turret_angle: self.turret_angle,
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tank at {} body {:.2}° turret {:.2}° ({:?}, body {:?}, turret {:?})",
            self.location,
            self.body_angle,
            self.turret_angle,
            self.motion,
            self.body_turning,
            self.turret_turning,
        )
    }
}
