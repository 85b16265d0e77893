/// Render seconds-since-midnight as a zero-padded `HH:MM:SS` string.
///
/// The inverse of timestamp decoding: every valid timestamp survives a
/// decode / re-encode round trip unchanged.
///
/// # Examples
///
/// ```
/// use jobmon_core::formatting::seconds_to_time_str;
///
/// assert_eq!(seconds_to_time_str(0),      "00:00:00");
/// assert_eq!(seconds_to_time_str(3661),   "01:01:01");
/// assert_eq!(seconds_to_time_str(36000),  "10:00:00");
/// assert_eq!(seconds_to_time_str(86399),  "23:59:59");
/// ```
pub fn seconds_to_time_str(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a duration in fractional minutes as a human-readable string.
///
/// * `< 1` minute → whole seconds, `"30s"`
/// * `< 60` minutes → one decimal place, `"5.5m"`
/// * `≥ 60` minutes → hours and whole minutes, `"1h 15m"`
///
/// # Examples
///
/// ```
/// use jobmon_core::formatting::format_duration;
///
/// assert_eq!(format_duration(0.5),   "30s");
/// assert_eq!(format_duration(5.5),   "5.5m");
/// assert_eq!(format_duration(75.0),  "1h 15m");
/// assert_eq!(format_duration(60.0),  "1h 0m");
/// ```
pub fn format_duration(minutes: f64) -> String {
    if minutes < 1.0 {
        format!("{}s", (minutes * 60.0) as i64)
    } else if minutes < 60.0 {
        format!("{:.1}m", minutes)
    } else {
        let hours = (minutes / 60.0) as i64;
        let mins = (minutes % 60.0) as i64;
        format!("{}h {}m", hours, mins)
    }
}

/// Calculate `(part / whole) * 100`, rounded to `decimal_places`.
///
/// Returns `0.0` if `whole` is zero to avoid division by zero.
///
/// # Examples
///
/// ```
/// use jobmon_core::formatting::percentage;
///
/// assert!((percentage(1.0, 4.0, 1) - 25.0).abs() < 1e-9);
/// assert_eq!(percentage(3.0, 0.0, 2), 0.0);
/// ```
pub fn percentage(part: f64, whole: f64, decimal_places: u32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let raw = (part / whole) * 100.0;
    let factor = 10_f64.powi(decimal_places as i32);
    (raw * factor).round() / factor
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── seconds_to_time_str ──────────────────────────────────────────────────

    #[test]
    fn test_seconds_to_time_str_midnight() {
        assert_eq!(seconds_to_time_str(0), "00:00:00");
    }

    #[test]
    fn test_seconds_to_time_str_mixed() {
        assert_eq!(seconds_to_time_str(3661), "01:01:01");
    }

    #[test]
    fn test_seconds_to_time_str_whole_hour() {
        assert_eq!(seconds_to_time_str(36000), "10:00:00");
    }

    #[test]
    fn test_seconds_to_time_str_last_second() {
        assert_eq!(seconds_to_time_str(86399), "23:59:59");
    }

    // ── format_duration ──────────────────────────────────────────────────────

    #[test]
    fn test_format_duration_sub_minute() {
        assert_eq!(format_duration(0.5), "30s");
        assert_eq!(format_duration(0.0), "0s");
    }

    #[test]
    fn test_format_duration_exactly_one_minute() {
        assert_eq!(format_duration(1.0), "1.0m");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(5.5), "5.5m");
        assert_eq!(format_duration(12.0), "12.0m");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(75.0), "1h 15m");
        assert_eq!(format_duration(125.0), "2h 5m");
    }

    #[test]
    fn test_format_duration_exact_hour() {
        assert_eq!(format_duration(60.0), "1h 0m");
    }

    // ── percentage ───────────────────────────────────────────────────────────

    #[test]
    fn test_percentage_basic() {
        let p = percentage(1.0, 4.0, 1);
        assert!((p - 25.0).abs() < 1e-9, "percentage = {p}");
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(10.0, 0.0, 2), 0.0);
    }

    #[test]
    fn test_percentage_rounding() {
        let p = percentage(1.0, 3.0, 2);
        assert!((p - 33.33).abs() < 1e-2, "percentage = {p}");
    }
}
