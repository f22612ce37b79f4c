//! Generators for sample race data.
//!
//! - [`Course`]: ordered legs for preset race formats
//! - [`SplitGenerator`]: athletes with realistic split times over a course

pub mod course;
pub mod timing;

pub use course::{Course, Discipline, Leg};
pub use timing::{SplitGenConfig, SplitGenerator};
