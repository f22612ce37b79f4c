//! Runner profile.

use super::AthleteProfile;

/// Running: ~5:00/km base pace.
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self::with_pace(5.0)
    }
}

impl RunnerProfile {
    /// Creates a profile from a pace in minutes per kilometer.
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 1000.0 / (pace_min_per_km * 60.0),
            variance: 0.08,
        }
    }
}

impl AthleteProfile for RunnerProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn grade_factor(&self, grade: f64) -> f64 {
        if grade >= 0.0 {
            (1.0 - grade * 15.0).max(0.2)
        } else {
            (1.0 - grade * 8.0).min(1.5)
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{sample_variance, speed_at_grade};
    use rand::SeedableRng;

    #[test]
    fn test_default_pace() {
        let profile = RunnerProfile::default();
        assert!((profile.base_speed_mps() - 3.333).abs() < 0.01);
    }

    #[test]
    fn test_variance_is_bounded() {
        let profile = RunnerProfile::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let factor = sample_variance(&profile, &mut rng);
            assert!((0.7..=1.4).contains(&factor));
        }
        assert!(speed_at_grade(&profile, 0.5, 0.7) >= 0.3);
    }
}
