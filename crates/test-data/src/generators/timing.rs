//! Split time generation with realistic per-athlete variation.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};
use splits::models::{Athlete, Segment};
use uuid::Uuid;

use super::course::{Course, Discipline, Leg};
use crate::config::SkillDistribution;
use crate::profiles::{
    AthleteProfile, CyclistProfile, RunnerProfile, SwimmerProfile, sample_variance, speed_at_grade,
};

/// Configuration for split generation.
#[derive(Debug, Clone)]
pub struct SplitGenConfig {
    /// Distribution of performance levels.
    pub skill_distribution: SkillDistribution,
    /// Range of transition durations in seconds, before skill scaling.
    pub transition_seconds: (f64, f64),
    /// Probability that a leg after the first has a gap before it (missed timing mat).
    pub gap_probability: f64,
    /// Range of gap durations in seconds.
    pub gap_seconds: (f64, f64),
}

impl Default for SplitGenConfig {
    fn default() -> Self {
        Self {
            skill_distribution: SkillDistribution::power_law(),
            transition_seconds: (60.0, 180.0),
            gap_probability: 0.0,
            gap_seconds: (20.0, 90.0),
        }
    }
}

/// Generates athletes with split times for a course.
pub struct SplitGenerator {
    config: SplitGenConfig,
    swimmer: SwimmerProfile,
    cyclist: CyclistProfile,
    runner: RunnerProfile,
}

impl SplitGenerator {
    pub fn new() -> Self {
        Self::with_config(SplitGenConfig::default())
    }

    pub fn with_config(config: SplitGenConfig) -> Self {
        Self {
            config,
            swimmer: SwimmerProfile::default(),
            cyclist: CyclistProfile::default(),
            runner: RunnerProfile::default(),
        }
    }

    /// Generates one athlete with contiguous (or gapped) splits over `course`.
    pub fn generate(&self, course: &Course, rng: &mut impl Rng) -> Athlete {
        let id = Uuid::from_bytes(rng.r#gen()).to_string();
        let name: String = Name().fake_with_rng(rng);
        let skill = self.sample_skill_factor(rng);

        let mut cursor = 0.0;
        let mut splits = Vec::with_capacity(course.legs.len());
        for (i, leg) in course.legs.iter().enumerate() {
            if i > 0 && rng.r#gen::<f64>() < self.config.gap_probability {
                let (lo, hi) = self.config.gap_seconds;
                cursor += rng.gen_range(lo..=hi).round();
            }

            let duration = self.leg_seconds(leg, skill, rng);
            let mut segment = Segment::new(leg.name.clone(), cursor, cursor + duration);
            if let Some(laps) = leg.laps {
                segment = segment.with_laps(laps);
            }
            if let Some(km) = leg.distance_km {
                segment = segment.with_distance_km(km);
            }
            cursor = segment.end;
            splits.push(segment);
        }

        Athlete::new(id, name, splits)
    }

    pub fn generate_batch(&self, course: &Course, count: usize, rng: &mut impl Rng) -> Vec<Athlete> {
        (0..count).map(|_| self.generate(course, rng)).collect()
    }

    /// Whole seconds spent on a leg, at least one.
    fn leg_seconds(&self, leg: &Leg, skill: f64, rng: &mut impl Rng) -> f64 {
        let seconds = match leg.discipline {
            Discipline::Transition => {
                let (lo, hi) = self.config.transition_seconds;
                rng.gen_range(lo..=hi) * skill
            }
            discipline => {
                let profile = self.profile_for(discipline);
                let variance = sample_variance(profile, rng);
                let speed = speed_at_grade(profile, leg.average_grade, variance);
                let meters = leg.distance_km.unwrap_or(0.0) * 1000.0;
                meters / speed * skill
            }
        };
        seconds.round().max(1.0)
    }

    fn profile_for(&self, discipline: Discipline) -> &dyn AthleteProfile {
        match discipline {
            Discipline::Swim => &self.swimmer,
            Discipline::Bike => &self.cyclist,
            Discipline::Run | Discipline::Transition => &self.runner,
        }
    }

    /// Samples a skill multiplier: below 1.0 is faster than average.
    fn sample_skill_factor(&self, rng: &mut impl Rng) -> f64 {
        match self.config.skill_distribution {
            SkillDistribution::Uniform => rng.gen_range(0.7..1.5),

            SkillDistribution::Normal { mean, std_dev } => Normal::new(mean, std_dev)
                .map(|normal| normal.sample(rng).clamp(0.5, 2.0))
                .unwrap_or(mean),

            SkillDistribution::PowerLaw { alpha } => {
                let sigma = 0.4 / alpha.sqrt();
                let mu = -0.5 * sigma * sigma; // mean of 1.0
                LogNormal::new(mu, sigma)
                    .map(|log_normal| log_normal.sample(rng).clamp(0.5, 3.0))
                    .unwrap_or(1.0)
            }
        }
    }
}

impl Default for SplitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoursePreset;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_splits_are_contiguous() {
        let generator = SplitGenerator::new();
        let course = Course::preset(CoursePreset::Olympic);
        let mut rng = StdRng::seed_from_u64(12345);

        let athlete = generator.generate(&course, &mut rng);
        assert_eq!(athlete.splits.len(), course.legs.len());
        assert_eq!(athlete.splits[0].start, 0.0);
        for pair in athlete.splits.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[1].end > pair[1].start);
        }
        assert_eq!(athlete.splits[2].lap_count(), 4);
        assert_eq!(athlete.splits[1].total_distance_km, None);
    }

    #[test]
    fn test_olympic_times_are_plausible() {
        let generator = SplitGenerator::new();
        let course = Course::preset(CoursePreset::Olympic);
        let mut rng = StdRng::seed_from_u64(7);

        for athlete in generator.generate_batch(&course, 50, &mut rng) {
            let finish = athlete.finish_time().unwrap();
            assert!(finish > 3600.0 && finish < 40_000.0, "finish {finish}");
        }
    }

    #[test]
    fn test_gaps_leave_holes() {
        let generator = SplitGenerator::with_config(SplitGenConfig {
            gap_probability: 1.0,
            ..Default::default()
        });
        let course = Course::preset(CoursePreset::Marathon);
        let mut rng = StdRng::seed_from_u64(99);

        let athlete = generator.generate(&course, &mut rng);
        for pair in athlete.splits.windows(2) {
            assert!(pair[1].start > pair[0].end);
        }
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let generator = SplitGenerator::new();
        let course = Course::preset(CoursePreset::Sprint);
        let a = generator.generate(&course, &mut StdRng::seed_from_u64(1));
        let b = generator.generate(&course, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_skill_range() {
        let generator = SplitGenerator::with_config(SplitGenConfig {
            skill_distribution: SkillDistribution::Uniform,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..500 {
            let factor = generator.sample_skill_factor(&mut rng);
            assert!((0.7..1.5).contains(&factor), "factor {factor}");
        }
    }

    #[test]
    fn test_normal_skill_clamped() {
        let generator = SplitGenerator::with_config(SplitGenConfig {
            skill_distribution: SkillDistribution::Normal {
                mean: 1.0,
                std_dev: 0.5,
            },
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(9);
        let factors: Vec<f64> = (0..1000)
            .map(|_| generator.sample_skill_factor(&mut rng))
            .collect();
        assert!(factors.iter().all(|f| (0.5..=2.0).contains(f)));
        let mean = factors.iter().sum::<f64>() / factors.len() as f64;
        assert!(mean > 0.9 && mean < 1.1, "Mean {mean} should be near 1.0");
    }

    #[test]
    fn test_power_law_skill_mean() {
        let generator = SplitGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);
        let factors: Vec<f64> = (0..1000)
            .map(|_| generator.sample_skill_factor(&mut rng))
            .collect();
        let mean = factors.iter().sum::<f64>() / factors.len() as f64;
        assert!(mean > 0.8 && mean < 1.4, "Mean {mean} should be near 1.0");
    }
}
