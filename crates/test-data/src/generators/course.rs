//! Course definitions: the ordered legs an athlete's splits are recorded for.

use crate::config::CoursePreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Swim,
    Bike,
    Run,
    /// Changeover between disciplines; timed but has no distance.
    Transition,
}

/// One timed portion of a course.
#[derive(Debug, Clone)]
pub struct Leg {
    pub name: String,
    pub discipline: Discipline,
    pub distance_km: Option<f64>,
    pub laps: Option<u32>,
    /// Average grade as a fraction (0.02 = 2% net climb).
    pub average_grade: f64,
}

impl Leg {
    pub fn new(name: impl Into<String>, discipline: Discipline, distance_km: f64) -> Self {
        Self {
            name: name.into(),
            discipline,
            distance_km: Some(distance_km),
            laps: None,
            average_grade: 0.0,
        }
    }

    pub fn transition(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discipline: Discipline::Transition,
            distance_km: None,
            laps: None,
            average_grade: 0.0,
        }
    }

    pub fn laps(mut self, laps: u32) -> Self {
        self.laps = Some(laps);
        self
    }

    pub fn grade(mut self, grade: f64) -> Self {
        self.average_grade = grade;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    pub name: String,
    pub legs: Vec<Leg>,
}

impl Course {
    pub fn preset(preset: CoursePreset) -> Self {
        use Discipline::*;

        let (name, legs) = match preset {
            CoursePreset::Sprint => (
                "Sprint Triathlon",
                vec![
                    Leg::new("Swim", Swim, 0.75),
                    Leg::transition("T1"),
                    Leg::new("Bike", Bike, 20.0).laps(2).grade(0.005),
                    Leg::transition("T2"),
                    Leg::new("Run", Run, 5.0).laps(2),
                ],
            ),
            CoursePreset::Olympic => (
                "Olympic Triathlon",
                vec![
                    Leg::new("Swim", Swim, 1.5),
                    Leg::transition("T1"),
                    Leg::new("Bike", Bike, 40.0).laps(4).grade(0.004),
                    Leg::transition("T2"),
                    Leg::new("Run", Run, 10.0).laps(4),
                ],
            ),
            CoursePreset::Marathon => (
                "Marathon",
                vec![
                    Leg::new("Start - 10K", Run, 10.0),
                    Leg::new("10K - Half", Run, 11.0975),
                    Leg::new("Half - 30K", Run, 8.9025).grade(0.005),
                    Leg::new("30K - Finish", Run, 12.195).grade(-0.003),
                ],
            ),
            CoursePreset::Track10k => (
                "Track 10,000 m",
                vec![Leg::new("10,000 m", Run, 10.0).laps(25)],
            ),
        };

        Self {
            name: name.to_string(),
            legs,
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().filter_map(|l| l.distance_km).sum()
    }
}
