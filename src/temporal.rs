//! Time-windowed analytics
//!
//! Stress duration and recovery rate, read from the historical window.

use crate::stress::reading_stress_index;
use crate::types::{SensorReading, StressDuration};
use crate::window::SAMPLE_CADENCE_MINUTES;
use chrono::{DateTime, Utc};

/// Number of most recent readings the recovery rate looks at
pub const RECOVERY_TAIL_LEN: usize = 6;

/// How long the plant has been under stress.
///
/// Zero unless the latest reading carries a stress label. Otherwise measured
/// from the first labeled reading in the window to `now`.
pub fn stress_duration(
    latest: &SensorReading,
    window: &[SensorReading],
    now: DateTime<Utc>,
) -> StressDuration {
    if !latest.has_stress_type() {
        return StressDuration::default();
    }

    match window.iter().find(|r| r.has_stress_type()) {
        Some(start) => StressDuration::from_minutes((now - start.timestamp).num_minutes()),
        None => StressDuration::default(),
    }
}

/// PSI change per hour over the window tail; positive means improving.
///
/// Assumes five-minute spacing between tail entries. Fewer than two
/// readings give 0.
pub fn recovery_rate(window: &[SensorReading]) -> i64 {
    if window.len() < 2 {
        return 0;
    }

    let tail = &window[window.len().saturating_sub(RECOVERY_TAIL_LEN)..];
    let (Some(first), Some(last)) = (tail.first(), tail.last()) else {
        return 0;
    };

    let hours = (tail.len() as f64) * SAMPLE_CADENCE_MINUTES / 60.0;
    let rate = (reading_stress_index(first) - reading_stress_index(last)) / hours;
    round_half_up(rate)
}

/// Round to nearest, ties toward positive infinity
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn reading_at(id: i64, minutes: i64) -> SensorReading {
        SensorReading::new(id, start() + Duration::minutes(minutes))
    }

    fn stressed(mut reading: SensorReading) -> SensorReading {
        reading.stress_type = Some("heat".to_string());
        reading
    }

    fn with_soil(mut reading: SensorReading, soil: f64) -> SensorReading {
        reading.soil_moisture = Some(soil);
        reading
    }

    #[test]
    fn test_duration_zero_when_latest_unstressed() {
        let window = vec![stressed(reading_at(1, 0)), reading_at(2, 5)];
        let latest = reading_at(3, 10);
        let now = start() + Duration::hours(3);

        assert_eq!(stress_duration(&latest, &window, now).to_string(), "0h 0m");
    }

    #[test]
    fn test_duration_zero_with_empty_or_unlabeled_window() {
        let latest = stressed(reading_at(3, 10));
        let now = start() + Duration::hours(3);

        assert_eq!(stress_duration(&latest, &[], now).to_string(), "0h 0m");

        let window = vec![reading_at(1, 0), reading_at(2, 5)];
        assert_eq!(stress_duration(&latest, &window, now).to_string(), "0h 0m");
    }

    #[test]
    fn test_duration_from_first_labeled_reading() {
        let window = vec![
            reading_at(1, 0),
            stressed(reading_at(2, 15)),
            stressed(reading_at(3, 20)),
        ];
        let latest = stressed(reading_at(4, 25));
        let now = start() + Duration::minutes(15 + 2 * 60 + 47) + Duration::seconds(59);

        assert_eq!(stress_duration(&latest, &window, now).to_string(), "2h 47m");
    }

    #[test]
    fn test_duration_ignores_empty_label() {
        let mut blank = reading_at(1, 0);
        blank.stress_type = Some(String::new());
        let window = vec![blank, stressed(reading_at(2, 30))];
        let latest = stressed(reading_at(3, 35));
        let now = start() + Duration::minutes(90);

        assert_eq!(stress_duration(&latest, &window, now).to_string(), "1h 0m");
    }

    #[test]
    fn test_duration_future_start_saturates() {
        let window = vec![stressed(reading_at(1, 60))];
        let latest = stressed(reading_at(2, 60));

        assert!(stress_duration(&latest, &window, start()).is_zero());
    }

    #[test]
    fn test_recovery_rate_needs_two_readings() {
        assert_eq!(recovery_rate(&[]), 0);
        assert_eq!(recovery_rate(&[with_soil(reading_at(1, 0), 0.0)]), 0);
    }

    #[test]
    fn test_recovery_rate_improving() {
        // PSI from soil only: dry (100 * 0.3 = 30) to wet (0)
        let window = vec![
            with_soil(reading_at(1, 0), 0.0),
            with_soil(reading_at(2, 5), 1023.0),
        ];
        // 30 / (2 * 5 / 60) = 180
        assert_eq!(recovery_rate(&window), 180);
    }

    #[test]
    fn test_recovery_rate_worsening_uses_last_six() {
        let mut window = vec![with_soil(reading_at(0, 0), 0.0)];
        for i in 1..=6 {
            window.push(with_soil(reading_at(i, i * 5), 1023.0));
        }
        window.push(with_soil(reading_at(7, 35), 0.0));

        // Tail is readings 2..=7: PSI 0 -> 30 over 6 * 5 minutes = -60/h
        assert_eq!(recovery_rate(&window), -60);
    }

    #[test]
    fn test_recovery_rate_stable() {
        let window: Vec<SensorReading> = (0..10).map(|i| reading_at(i, i * 5)).collect();
        assert_eq!(recovery_rate(&window), 0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.49), 0);
    }
}
