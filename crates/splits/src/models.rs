//! Race data model: athletes and their recorded split segments.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A named portion of the course with the times the athlete entered and left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "segment")]
    pub name: String,
    /// Elapsed race time at segment start, in seconds
    pub start: f64,
    /// Elapsed race time at segment end, in seconds
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laps: Option<NonZeroU32>,
    #[serde(
        default,
        rename = "totalDistanceKm",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_distance_km: Option<f64>,
}

impl Segment {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            laps: None,
            total_distance_km: None,
        }
    }

    /// Sets the lap count. Zero leaves the segment at the single-lap default.
    pub fn with_laps(mut self, laps: u32) -> Self {
        self.laps = NonZeroU32::new(laps);
        self
    }

    pub fn with_distance_km(mut self, km: f64) -> Self {
        self.total_distance_km = Some(km);
        self
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True when `t` lies within `[start, end]`, both ends inclusive.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Lap count, defaulting to a single lap.
    pub fn lap_count(&self) -> u32 {
        self.laps.map_or(1, NonZeroU32::get)
    }

    /// Total distance in kilometers, defaulting to zero.
    pub fn distance_km(&self) -> f64 {
        self.total_distance_km.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: String,
    pub name: String,
    /// Chronologically ordered splits
    #[serde(default)]
    pub splits: Vec<Segment>,
}

impl Athlete {
    pub fn new(id: impl Into<String>, name: impl Into<String>, splits: Vec<Segment>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            splits,
        }
    }

    /// End time of the final segment.
    pub fn finish_time(&self) -> Option<f64> {
        self.splits.last().map(|s| s.end)
    }
}

/// The full, read-only data set for a viewing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceData {
    #[serde(default)]
    pub athletes: Vec<Athlete>,
}

impl RaceData {
    pub fn new(athletes: Vec<Athlete>) -> Self {
        Self { athletes }
    }

    pub fn athlete(&self, id: &str) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.id == id)
    }

    /// Looks up an athlete by id, falling back to the first athlete when the
    /// id is missing or unknown.
    pub fn select(&self, id: Option<&str>) -> Option<&Athlete> {
        id.and_then(|id| self.athlete(id))
            .or_else(|| self.athletes.first())
    }

    /// Latest segment end across every athlete, or zero when there are no segments.
    pub fn max_end_time(&self) -> f64 {
        self.athletes
            .iter()
            .flat_map(|a| a.splits.iter().map(|s| s.end))
            .fold(0.0, f64::max)
    }

    /// Clamps a scrubbed time into `[0, max_end_time]`.
    pub fn clamp_time(&self, t: f64) -> f64 {
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, self.max_end_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RaceData {
        RaceData::new(vec![
            Athlete::new(
                "a1",
                "Aiko",
                vec![
                    Segment::new("Swim", 0.0, 1800.0),
                    Segment::new("Bike", 1800.0, 5400.0),
                ],
            ),
            Athlete::new("a2", "Ben", vec![Segment::new("Run", 0.0, 6000.0)]),
        ])
    }

    #[test]
    fn test_segment_defaults() {
        let seg = Segment::new("Run", 10.0, 70.0);
        assert_eq!(seg.lap_count(), 1);
        assert_eq!(seg.distance_km(), 0.0);
        assert_eq!(seg.duration(), 60.0);
        assert_eq!(seg.with_laps(0).lap_count(), 1);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let seg = Segment::new("Run", 10.0, 70.0);
        assert!(seg.contains(10.0));
        assert!(seg.contains(70.0));
        assert!(!seg.contains(9.999));
        assert!(!seg.contains(70.001));
    }

    #[test]
    fn test_select_falls_back_to_first() {
        let data = sample();
        assert_eq!(data.select(Some("a2")).unwrap().name, "Ben");
        assert_eq!(data.select(Some("nobody")).unwrap().name, "Aiko");
        assert_eq!(data.select(None).unwrap().name, "Aiko");
        assert!(RaceData::default().select(None).is_none());
    }

    #[test]
    fn test_max_end_and_clamp() {
        let data = sample();
        assert_eq!(data.max_end_time(), 6000.0);
        assert_eq!(data.clamp_time(-5.0), 0.0);
        assert_eq!(data.clamp_time(9000.0), 6000.0);
        assert_eq!(data.clamp_time(f64::NAN), 0.0);
        assert_eq!(RaceData::default().max_end_time(), 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"athletes":[{"id":"x","name":"X","splits":[
            {"segment":"Track","start":0,"end":600,"laps":5,"totalDistanceKm":2.0}
        ]}]}"#;
        let data: RaceData = serde_json::from_str(json).unwrap();
        let seg = &data.athletes[0].splits[0];
        assert_eq!(seg.name, "Track");
        assert_eq!(seg.lap_count(), 5);
        assert_eq!(seg.distance_km(), 2.0);
        assert_eq!(data.athletes[0].finish_time(), Some(600.0));
    }

    #[test]
    fn test_zero_laps_rejected_by_parser() {
        let json = r#"{"segment":"Track","start":0,"end":600,"laps":0}"#;
        assert!(serde_json::from_str::<Segment>(json).is_err());
    }
}
