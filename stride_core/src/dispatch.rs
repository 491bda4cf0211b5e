//! Dispatch of raw sensor packages to activities.
//!
//! A package is an activity code plus the positional fields of that
//! activity's constructor:
//! - `SWM`: action, duration, weight, length_pool, count_pool
//! - `RUN`: action, duration, weight
//! - `WLK`: action, duration, weight, height

use crate::{Error, Result, Running, SportsWalking, Swimming, Workout};
use std::fmt;
use std::str::FromStr;

/// Activity code carried by a sensor package
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityCode {
    Swimming,
    Running,
    Walking,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [
        ActivityCode::Swimming,
        ActivityCode::Running,
        ActivityCode::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Swimming => "SWM",
            ActivityCode::Running => "RUN",
            ActivityCode::Walking => "WLK",
        }
    }

    /// Number of positional fields the activity's constructor consumes
    pub fn arity(&self) -> usize {
        match self {
            ActivityCode::Swimming => 5,
            ActivityCode::Running => 3,
            ActivityCode::Walking => 4,
        }
    }

    /// Build the activity from exactly `arity()` fields
    fn construct(&self, data: &[f64]) -> Result<Workout> {
        let workout: Workout = match *self {
            ActivityCode::Swimming => Swimming::new(
                count_field("action", data[0])?,
                data[1],
                data[2],
                data[3],
                count_field("count_pool", data[4])?,
            )
            .into(),
            ActivityCode::Running => {
                Running::new(count_field("action", data[0])?, data[1], data[2]).into()
            }
            ActivityCode::Walking => SportsWalking::new(
                count_field("action", data[0])?,
                data[1],
                data[2],
                data[3],
            )
            .into(),
        };
        Ok(workout)
    }
}

impl FromStr for ActivityCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActivityCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| Error::InvalidActivityType(s.to_string()))
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read a sensor package into the matching activity
///
/// # Errors
/// - `InvalidActivityType` if `workout_type` is not SWM, RUN or WLK
/// - `FieldCount` if `data` does not have the activity's arity
/// - `InvalidField` if a count field is negative, fractional or non-finite
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let code: ActivityCode = workout_type.parse()?;

    if data.len() != code.arity() {
        return Err(Error::FieldCount {
            code: code.to_string(),
            expected: code.arity(),
            found: data.len(),
        });
    }

    let workout = code.construct(data)?;

    let duration = workout.as_training().duration();
    if duration <= 0.0 {
        tracing::warn!("{} package has non-positive duration {}", code, duration);
    }
    tracing::debug!("Read {} package as {:?}", code, workout);

    Ok(workout)
}

/// Convert a raw count reading into a whole number
fn count_field(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(Error::InvalidField { field, value })
    }
}
