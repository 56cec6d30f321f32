//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load shift configurations from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} shifts", config.shifts().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceConfig, ShiftsFile};
