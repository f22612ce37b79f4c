//! Fluent builder for complete sample race data sets.

use std::time::Instant;

use rand::Rng;
use splits::errors::LoadError;
use splits::loader::{LoadReport, validate};
use splits::models::RaceData;
use tracing::info;

use crate::config::{CoursePreset, GenConfig, SkillDistribution};
use crate::generators::{Course, SplitGenConfig, SplitGenerator};

/// Builder for creating a race data set.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use test_data::prelude::*;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let data = RaceBuilder::new()
///     .with_athletes(5)
///     .with_course(CoursePreset::Sprint)
///     .build(&mut rng);
/// assert_eq!(data.athletes.len(), 5);
/// ```
pub struct RaceBuilder {
    athlete_count: usize,
    course: Course,
    split_config: SplitGenConfig,
}

impl Default for RaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RaceBuilder {
    pub fn new() -> Self {
        Self {
            athlete_count: 10,
            course: Course::preset(CoursePreset::default()),
            split_config: SplitGenConfig::default(),
        }
    }

    /// Starts a builder from a generation config.
    pub fn from_config(config: &GenConfig) -> Self {
        Self::new()
            .with_athletes(config.athlete_count)
            .with_course(config.course)
            .with_gap_probability(config.gap_probability)
    }

    pub fn with_athletes(mut self, count: usize) -> Self {
        self.athlete_count = count;
        self
    }

    pub fn with_course(mut self, preset: CoursePreset) -> Self {
        self.course = Course::preset(preset);
        self
    }

    pub fn with_custom_course(mut self, course: Course) -> Self {
        self.course = course;
        self
    }

    pub fn with_skill_distribution(mut self, distribution: SkillDistribution) -> Self {
        self.split_config.skill_distribution = distribution;
        self
    }

    /// Probability that a split is preceded by a timing gap.
    pub fn with_gap_probability(mut self, probability: f64) -> Self {
        self.split_config.gap_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn build(self, rng: &mut impl Rng) -> RaceData {
        let started = Instant::now();
        let generator = SplitGenerator::with_config(self.split_config);
        let athletes = generator.generate_batch(&self.course, self.athlete_count, rng);

        info!(
            "Generated {} athletes for {} in {}ms",
            athletes.len(),
            self.course.name,
            started.elapsed().as_millis()
        );
        RaceData::new(athletes)
    }

    /// Builds the data set and runs it through the same validation as loading.
    pub fn build_validated(self, rng: &mut impl Rng) -> Result<LoadReport, LoadError> {
        validate(self.build(rng))
    }
}
