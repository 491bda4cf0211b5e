//! Activity types and their metric models.
//!
//! Every activity shares the distance and mean-speed formulas unless it
//! overrides them. Calories have no shared formula: each activity must
//! supply its own `spent_calories`, so there is no "base" training that
//! could be asked for calories it cannot compute.

use crate::formulas::{self, DEFAULT_STEP_LEN, MIN_IN_H, M_IN_KM};
use crate::report::InfoMessage;

/// Computation contract shared by all activities
pub trait Training {
    /// Activity label shown in reports
    fn training_type(&self) -> &'static str;

    /// Number of steps or strokes
    fn action(&self) -> u32;

    /// Duration in hours
    fn duration(&self) -> f64;

    /// Body weight in kg
    fn weight(&self) -> f64;

    /// Meters covered per action
    fn step_len(&self) -> f64 {
        DEFAULT_STEP_LEN
    }

    /// Distance in km
    fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action(), self.step_len())
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        formulas::mean_speed_kmh(self.distance_km(), self.duration())
    }

    /// Calories burned over the session
    fn spent_calories(&self) -> f64;

    /// Build the report for this session
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.duration(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running session
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

// ============================================================================
// Sports walking
// ============================================================================

/// Race-walking session; calories depend on the walker's height
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    /// `height` is in centimeters
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + (speed_ms.powi(2) / (self.height / Self::CM_IN_M))
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight)
            * self.duration
            * MIN_IN_H
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Pool swimming session; speed comes from pool geometry, not strokes
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// `length_pool` is in meters, `count_pool` is the number of lengths swum
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn step_len(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
            * self.duration
    }
}

// ============================================================================
// Closed set of activities
// ============================================================================

/// Any supported activity, as produced by the dispatcher
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Borrow the activity through its shared computation contract
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Walking(t) => t,
            Workout::Swimming(t) => t,
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        self.as_training().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::Walking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
