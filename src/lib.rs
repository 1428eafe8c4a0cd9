//! Cartesian: three-space vector arithmetic for orbital simulation
//!
//! This crate provides the numeric foundation for positional simulation code:
//!
//! - [`Space`]: a Cartesian (x, y, z) vector with exact arithmetic, dot and
//!   cross products, and division that refuses a zero divisor
//! - [`Rotator`]: axis-angle rotation with a memoized Rodrigues matrix
//! - [`Recorder`]: a fixed-capacity trajectory history that exports to a
//!   whitespace-delimited table
//!
//! ```rust
//! use cartesian::{deg2rad, Recorder, Rotator, Space};
//!
//! let mut rotator = Rotator::new(Space::UNIT_Z);
//! let mut recorder = Recorder::new(4);
//!
//! let mut heading = Space::UNIT_X;
//! for _ in 0..4 {
//!     heading = rotator.rotate(&heading, deg2rad(90.0))?;
//!     recorder.push(heading);
//! }
//! assert!((recorder[3] - Space::UNIT_X).magnitude() < 1e-9);
//! # Ok::<(), cartesian::SpaceError>(())
//! ```

pub mod constants;
pub mod errors;
pub mod recorder;
pub mod rotator;
pub mod space;

// Re-export commonly used types
pub use errors::{Result, SpaceError};
pub use recorder::Recorder;
pub use rotator::{deg2rad, rad2deg, Rotator};
pub use space::{cross, dot, parse_or_zero, Space};
