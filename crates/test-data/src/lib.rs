//! Sample data generation for race-view.
//!
//! Produces chip-timing data sets (athletes with recorded splits) in the same
//! JSON shape the `splits` loader reads.
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let data = RaceBuilder::new()
//!     .with_athletes(50)
//!     .with_course(CoursePreset::Olympic)
//!     .with_gap_probability(0.1)
//!     .build(&mut rng);
//! ```

pub mod builders;
pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::RaceBuilder;
    pub use crate::config::{CoursePreset, GenConfig, SkillDistribution};
    pub use crate::generators::{Course, Discipline, Leg, SplitGenConfig, SplitGenerator};
    pub use crate::profiles::{
        AthleteProfile, CyclistProfile, RunnerProfile, SwimmerProfile, sample_variance,
        speed_at_grade,
    };
}
