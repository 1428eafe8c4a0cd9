//! Constants module for vector and rotation calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Recorder
/// Number of samples a recorder holds when no capacity is given
pub const DEFAULT_RECORDER_CAPACITY: usize = 1024;
