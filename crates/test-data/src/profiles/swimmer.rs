//! Open-water swimmer profile.

use super::AthleteProfile;

/// Open-water swim pace: ~2:00/100 m (0.83 m/s) for an age-grouper.
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 100.0 / 120.0,
            variance: 0.12, // Sighting and conditions vary a lot
        }
    }
}

impl SwimmerProfile {
    /// Creates a profile from a pace in seconds per 100 m.
    pub fn with_pace_per_100m(seconds: f64) -> Self {
        Self {
            base_speed: 100.0 / seconds,
            ..Default::default()
        }
    }
}

impl AthleteProfile for SwimmerProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn grade_factor(&self, _grade: f64) -> f64 {
        1.0
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_conversion() {
        let profile = SwimmerProfile::with_pace_per_100m(100.0);
        assert!((profile.base_speed_mps() - 1.0).abs() < 1e-9);
        assert_eq!(profile.grade_factor(0.1), 1.0);
    }
}
