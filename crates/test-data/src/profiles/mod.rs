//! Athletic performance profiles per discipline.
//!
//! Profiles define realistic speeds and grade factors. The split generator uses
//! them to turn leg distances into leg times.

mod cyclist;
mod runner;
mod swimmer;

pub use cyclist::CyclistProfile;
pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;

use rand_distr::{Distribution, Normal};

/// Trait for athletic performance profiles.
pub trait AthleteProfile: Send + Sync {
    /// Base speed on flat terrain in meters per second.
    fn base_speed_mps(&self) -> f64;

    /// Speed multiplier for an average grade (0.05 = 5% climb).
    fn grade_factor(&self, grade: f64) -> f64;

    /// Day-to-day performance variance as a coefficient of variation.
    fn variance(&self) -> f64;
}

/// Effective speed on a leg with the given grade, scaled by a sampled variance factor.
pub fn speed_at_grade(profile: &dyn AthleteProfile, grade: f64, variance_factor: f64) -> f64 {
    let target = profile.base_speed_mps() * profile.grade_factor(grade);
    (target * variance_factor).max(0.3) // Keeps leg times finite
}

/// Samples a variance factor around 1.0 from the profile's coefficient of variation.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}
