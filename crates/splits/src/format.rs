//! Display formatting for race times, distances and percentages.

/// Formats elapsed seconds as zero-padded `HH:MM`.
///
/// Seconds are discarded, not rounded. Hours do not wrap at 24. Negative and
/// non-finite input is shown as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Formats kilometers with one decimal place, e.g. `4.5 km`.
pub fn format_distance(km: f64) -> String {
    // Also catches -0.0 and NaN
    let km = if km > 0.0 && km.is_finite() { km } else { 0.0 };
    format!("{km:.1} km")
}

/// Formats a `[0, 1]` fraction as a whole percentage, e.g. `25%`.
pub fn format_percent(fraction: f64) -> String {
    let pct = (fraction * 100.0).round();
    let pct = if pct > 0.0 && pct.is_finite() { pct } else { 0.0 };
    format!("{pct:.0}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(3725.0), "01:02");
        assert_eq!(format_time(2700.0), "00:45");
        assert_eq!(format_time(59.9), "00:00");
        assert_eq!(format_time(3599.0), "00:59");
    }

    #[test]
    fn test_format_time_past_a_day() {
        assert_eq!(format_time(90_000.0), "25:00");
        assert_eq!(format_time(360_000.0), "100:00");
    }

    #[test]
    fn test_format_time_invalid_input() {
        assert_eq!(format_time(-30.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(4.5), "4.5 km");
        assert_eq!(format_distance(40.0), "40.0 km");
        assert_eq!(format_distance(0.0), "0.0 km");
        assert_eq!(format_distance(1.26), "1.3 km");
        assert_eq!(format_distance(-0.04), "0.0 km");
        assert_eq!(format_distance(f64::NAN), "0.0 km");
        assert_eq!(format_distance(-0.0), "0.0 km");
        assert_eq!(format_distance(f64::INFINITY), "0.0 km");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.25), "25%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.125), "13%");
        assert_eq!(format_percent(f64::NAN), "0%");
        assert_eq!(format_percent(-0.0), "0%");
        assert_eq!(format_percent(-0.004), "0%");
    }
}
