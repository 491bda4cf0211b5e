#![forbid(unsafe_code)]

//! Core metric model and computation for the Stride workout summarizer.
//!
//! This crate provides:
//! - Metric formulas (distance, mean speed)
//! - Activity types (running, sports walking, swimming) and their calorie models
//! - Dispatch from sensor packages to activities
//! - Report rendering (text, JSON, CSV)
//! - Sample packages, configuration and logging setup

pub mod error;
pub mod formulas;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod samples;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use dispatch::{read_package, ActivityCode};
pub use report::{render_reports, InfoMessage, OutputFormat};
pub use samples::{get_sample_packages, Package};
pub use config::Config;
