//! End-to-end tests: load a data set, pick an athlete and time, render text.

use splits::config::{OutputFormat, ViewConfig};
use splits::loader::load_str;
use splits::progress::{find_segment_at, lap_and_distance, remaining, segment_progress};
use splits::view::{NO_SEGMENT_LABEL, ViewOptions, ViewState};

const SAMPLE_DATA: &str = include_str!("../../../data/sample-chip-data.json");

const TRIATHLON: &str = r#"{
    "athletes": [{
        "id": "t1",
        "name": "Tri Athlete",
        "splits": [
            {"segment": "Swim", "start": 0, "end": 1800, "laps": 1, "totalDistanceKm": 1.5},
            {"segment": "Bike", "start": 1800, "end": 5400, "laps": 1, "totalDistanceKm": 40}
        ]
    }]
}"#;

fn config(athlete: Option<&str>, time_seconds: f64) -> ViewConfig {
    ViewConfig {
        athlete_id: athlete.map(str::to_string),
        time_seconds,
        bar_width: 10,
        ..ViewConfig::default()
    }
}

fn render(json: &str, config: &ViewConfig) -> String {
    let report = load_str(json).expect("valid data");
    let mut out = Vec::new();
    assert!(splits::render(&report.data, config, &mut out).unwrap());
    String::from_utf8(out).unwrap()
}

#[test]
fn test_bike_quarter_scenario() {
    let report = load_str(TRIATHLON).unwrap();
    let splits = &report.data.athletes[0].splits;

    let segment = find_segment_at(splits, 2700.0);
    assert_eq!(segment.unwrap().name, "Bike");
    assert_eq!(segment_progress(segment, 2700.0), 0.25);
    let laps = lap_and_distance(segment, 2700.0).unwrap();
    assert_eq!((laps.current_lap, laps.total_laps), (1, 1));
    assert!((laps.distance_covered_km - 10.0).abs() < 1e-9);
    assert_eq!(remaining(splits, 2700.0), 2700.0);

    let text = render(TRIATHLON, &config(Some("t1"), 2700.0));
    assert!(text.contains("Segment    Bike\n"));
    assert!(text.contains("Progress   25%\n"));
    assert!(text.contains("Remaining  00:45\n"));
    assert!(text.contains("Lap        1/1\n"));
    assert!(text.contains("Distance   10.0 km / 40.0 km\n"));
    assert!(text.contains("[#####-----] 50%\n"));
}

#[test]
fn test_time_is_clamped_to_race_clock() {
    let text = render(TRIATHLON, &config(None, 99_999.0));
    assert!(text.contains("Time       01:30 (max 01:30)\n"));
    // The shared finish instant still belongs to the last split
    assert!(text.contains("Segment    Bike\n"));
    assert!(text.contains("Remaining  00:00\n"));

    let text = render(TRIATHLON, &config(None, -50.0));
    assert!(text.contains("Time       00:00 (max 01:30)\n"));
    assert!(text.contains("Segment    Swim\n"));
}

#[test]
fn test_sample_data_loads_with_gap_athlete() {
    let report = load_str(SAMPLE_DATA).unwrap();
    assert_eq!(report.data.athletes.len(), 3);
    assert!(report.warnings.is_empty());

    // Chloe has transition gaps between splits
    let chloe = report.data.athlete("A003").unwrap();
    let view = ViewState::build(&report.data, chloe, 2070.0, &ViewOptions::default());
    assert_eq!(view.segment_label, NO_SEGMENT_LABEL);
    assert!(view.laps.is_none());
    assert_eq!(view.bar.cells, vec![false, false, false]);
}

#[test]
fn test_unknown_athlete_falls_back_to_first() {
    let text = render(SAMPLE_DATA, &config(Some("missing"), 0.0));
    assert!(text.starts_with("Aiko Tanaka\n"));
}

#[test]
fn test_multi_lap_run() {
    let report = load_str(SAMPLE_DATA).unwrap();
    let aiko = report.data.athlete("A001").unwrap();
    // 2/3 through a 4-lap run
    let view = ViewState::build(&report.data, aiko, 7200.0, &ViewOptions::default());
    let laps = view.laps.unwrap();
    assert_eq!(view.segment_label, "Run");
    assert_eq!((laps.current_lap, laps.total_laps), (3, 4));
    assert_eq!(view.progress_label, "67%");
}

#[test]
fn test_json_output_format() {
    let config = ViewConfig {
        format: OutputFormat::Json,
        ..config(Some("t1"), 2700.0)
    };
    let json: serde_json::Value = serde_json::from_str(&render(TRIATHLON, &config)).unwrap();
    assert_eq!(json["segment_label"], "Bike");
    assert_eq!(json["remaining_label"], "00:45");
    assert_eq!(json["laps"]["total_distance_km"], 40.0);
}
