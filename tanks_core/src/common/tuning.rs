//! Gameplay tuning for the Tank.
//!
//! Defaults match [`constants`](super::constants). A tuning file only needs
//! to list the values it overrides:
//!
//! ```toml
//! speed_max = 120.0
//! turret_turn_rate_max = 60.0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{
    BODY_TURN_RATE_MAX, BODY_TURN_RATE_WHILE_DRIVING, MAX_SUBSTEP, MIN_SUBSTEP, SPEED_MAX,
    SPEED_WHILE_TURNING, TURRET_TURN_RATE_MAX,
};
use super::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TankTuning {
    /// Speed in units per second when driving straight.
    pub speed_max: f64,

    /// Speed in units per second when driving and turning at once.
    pub speed_while_turning: f64,

    /// Body turn rate in degrees per second when standing still.
    pub body_turn_rate_max: f64,

    /// Body turn rate in degrees per second when driving.
    pub body_turn_rate_while_driving: f64,

    /// Turret turn rate in degrees per second.
    pub turret_turn_rate_max: f64,

    /// Upper bound on a single integration step, in seconds.
    pub max_substep: f64,
}

impl Default for TankTuning {
    fn default() -> Self {
        Self {
            speed_max: SPEED_MAX,
            speed_while_turning: SPEED_WHILE_TURNING,
            body_turn_rate_max: BODY_TURN_RATE_MAX,
            body_turn_rate_while_driving: BODY_TURN_RATE_WHILE_DRIVING,
            turret_turn_rate_max: TURRET_TURN_RATE_MAX,
            max_substep: MAX_SUBSTEP,
        }
    }
}

impl TankTuning {
    pub fn from_file<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(ConfigError::Io)?;

        let mut buf = String::new();
        file.read_to_string(&mut buf).map_err(ConfigError::Io)?;

        let tuning = buf.parse::<Self>()?;
        tracing::debug!("loaded tank tuning from {}: {:?}", path.display(), tuning);

        Ok(tuning)
    }

    /// Checks that every rate is usable by the integrator.
    ///
    /// Rates must be finite and not negative. The sub-step must be finite and
    /// at least [`MIN_SUBSTEP`]; the number of steps a single call may take
    /// is bounded separately by [`MAX_SUBSTEPS`](super::constants::MAX_SUBSTEPS).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("speed_max", self.speed_max),
            ("speed_while_turning", self.speed_while_turning),
            ("body_turn_rate_max", self.body_turn_rate_max),
            (
                "body_turn_rate_while_driving",
                self.body_turn_rate_while_driving,
            ),
            ("turret_turn_rate_max", self.turret_turn_rate_max),
        ];

        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }

        if !self.max_substep.is_finite() || self.max_substep < MIN_SUBSTEP {
            return Err(ConfigError::Invalid {
                field: "max_substep",
                value: self.max_substep,
            });
        }

        Ok(())
    }
}

impl FromStr for TankTuning {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tuning: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        tuning.validate()?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use test_log::test;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let tuning: TankTuning = "".parse().unwrap();
        assert_eq!(tuning, TankTuning::default());
    }

    #[test]
    fn partial_override() {
        let tuning: TankTuning = "speed_max = 120.0\nmax_substep = 0.005\n".parse().unwrap();

        assert_eq!(tuning.speed_max, 120.0);
        assert_eq!(tuning.max_substep, 0.005);
        assert_eq!(tuning.speed_while_turning, SPEED_WHILE_TURNING);
        assert_eq!(tuning.turret_turn_rate_max, TURRET_TURN_RATE_MAX);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "top_speed = 5.0".parse::<TankTuning>().unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn zero_substep_is_rejected() {
        let err = "max_substep = 0.0".parse::<TankTuning>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_substep",
                ..
            }
        ));
    }

    #[test]
    fn tiny_substep_is_rejected() {
        let err = "max_substep = 1e-20".parse::<TankTuning>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_substep",
                value,
            } if value == 1e-20
        ));

        let tuning: TankTuning = "max_substep = 1e-6".parse().unwrap();
        assert_eq!(tuning.max_substep, MIN_SUBSTEP);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = "body_turn_rate_max = -45.0"
            .parse::<TankTuning>()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "body_turn_rate_max",
                value,
            } if value == -45.0
        ));
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let text = toml::to_string(&TankTuning::default()).unwrap();
        assert_eq!(text.parse::<TankTuning>().unwrap(), TankTuning::default());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("tank_tuning_{}.toml", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "turret_turn_rate_max = 60.0").unwrap();
        drop(file);

        let tuning = TankTuning::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(tuning.turret_turn_rate_max, 60.0);
        assert_eq!(tuning.speed_max, SPEED_MAX);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TankTuning::from_file("/nonexistent/tank_tuning.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
