//! Human-readable time formatting for annotation offsets and durations
//!
//! Annotation times are integer milliseconds. Display format is chosen by
//! magnitude:
//! - `X.XXs` below 100 seconds
//! - `M:SS.Xs` below 100 minutes
//! - `H:MM:SS` otherwise

const SHORT_FORMAT_MAX_MS: i64 = 100_000; // < 100s → X.XXs
const MEDIUM_FORMAT_MAX_MS: i64 = 6_000_000; // < 100m → M:SS.Xs

/// Format a millisecond value as human-readable time
///
/// # Examples
///
/// ```
/// use tav_common::human_time::format_millis;
///
/// assert_eq!(format_millis(500), "0.50s");
/// assert_eq!(format_millis(45_250), "45.25s");
/// assert_eq!(format_millis(330_000), "5:30.0s");
/// assert_eq!(format_millis(3_661_000), "61:01.0s");
/// assert_eq!(format_millis(7_200_000), "2:00:00");
/// assert_eq!(format_millis(-1_500), "-1.50s");
/// ```
pub fn format_millis(millis: i64) -> String {
    let is_negative = millis < 0;
    let abs_ms = millis.unsigned_abs() as i64;

    let formatted = if abs_ms < SHORT_FORMAT_MAX_MS {
        format!("{:.2}s", abs_ms as f64 / 1000.0)
    } else if abs_ms < MEDIUM_FORMAT_MAX_MS {
        let minutes = abs_ms / 60_000;
        let secs = (abs_ms % 60_000) as f64 / 1000.0;
        format!("{}:{:04.1}s", minutes, secs)
    } else {
        let total_secs = abs_ms / 1000;
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;
        format!("{}:{:02}:{:02}", hours, mins, secs)
    };

    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}
