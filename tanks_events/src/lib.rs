//! Event types exchanged between a Tank and whatever is driving it
//! (an input layer, a game loop, a renderer).

use serde::{Deserialize, Serialize};

use tanks_core::{MotionDirection, RotationDirection, Tank, TankSnapshot};

/// Game Events sent back to the collaborator that draws the Tank
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ServerGameEvent {
    TankUpdate(TankSnapshot),
}

impl ServerGameEvent {
    pub fn from_tank(tank: &Tank) -> Self {
        Self::TankUpdate(tank.snapshot())
    }
}

/// A single control of the Tank, usually bound to one key
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TankControl {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    TurretLeft,
    TurretRight,
}

/// Client Events
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientGameEvent {
    /// Edge of a control: `press` is true on key down, false on key up
    Control { control: TankControl, press: bool },
}

impl ClientGameEvent {
    /// Issues the matching Tank command.
    ///
    /// Releasing a control only stops the Tank if it is still doing what that
    /// control asked for, so releasing Forward after Backward was pressed
    /// keeps the Tank reversing.
    pub fn apply(&self, tank: &mut Tank) {
        let ClientGameEvent::Control { control, press } = *self;
        tracing::debug!("applying {:?} (press: {})", control, press);

        match (control, press) {
            (TankControl::Forward, true) => tank.start_driving_forwards(),
            (TankControl::Backward, true) => tank.start_driving_backwards(),
            (TankControl::TurnLeft, true) => tank.start_turning_left(),
            (TankControl::TurnRight, true) => tank.start_turning_right(),
            (TankControl::TurretLeft, true) => tank.start_turning_turret_left(),
            (TankControl::TurretRight, true) => tank.start_turning_turret_right(),

            (TankControl::Forward, false) => {
                if tank.motion() == MotionDirection::MovingForward {
                    tank.stop_driving();
                }
            }
            (TankControl::Backward, false) => {
                if tank.motion() == MotionDirection::MovingBackward {
                    tank.stop_driving();
                }
            }
            (TankControl::TurnLeft, false) => {
                if tank.body_turning() == RotationDirection::TurningLeft {
                    tank.stop_turning();
                }
            }
            (TankControl::TurnRight, false) => {
                if tank.body_turning() == RotationDirection::TurningRight {
                    tank.stop_turning();
                }
            }
            (TankControl::TurretLeft, false) => {
                if tank.turret_turning() == RotationDirection::TurningLeft {
                    tank.stop_turret_turning();
                }
            }
            (TankControl::TurretRight, false) => {
                if tank.turret_turning() == RotationDirection::TurningRight {
                    tank.stop_turret_turning();
                }
            }
        }
    }
}
