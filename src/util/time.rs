// Copyright (c) 2024 Electrolux Status contributors
// SPDX-License-Identifier: MPL-2.0

//! Duration conversions between appliance seconds and displayed minutes.

/// Sentinel value for an unknown or unlimited duration. Passed through unchanged.
pub const UNKNOWN_DURATION: i64 = -1;

/// Convert seconds to minutes, rounding up.
///
/// The input is truncated to whole seconds before the division. Converting the result back with
/// [`minutes_to_seconds`] doesn't return the original value if it isn't a multiple of 60.
///
/// returns: `None` for `None`, [`UNKNOWN_DURATION`] for -1.
pub fn seconds_to_minutes(seconds: Option<f64>) -> Option<i64> {
    let seconds = seconds?;
    if seconds == UNKNOWN_DURATION as f64 {
        return Some(UNKNOWN_DURATION);
    }
    Some((seconds.trunc() / 60.0).ceil() as i64)
}

/// Convert minutes to seconds. The input is truncated to whole minutes.
///
/// Results outside the `i64` range saturate at `i64::MIN` / `i64::MAX`.
///
/// returns: `None` for `None`, [`UNKNOWN_DURATION`] for -1.
pub fn minutes_to_seconds(minutes: Option<f64>) -> Option<i64> {
    let minutes = minutes?;
    if minutes == UNKNOWN_DURATION as f64 {
        return Some(UNKNOWN_DURATION);
    }
    Some((minutes.trunc() as i64).saturating_mul(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(-1.0), Some(-1))]
    #[case(Some(0.0), Some(0))]
    #[case(Some(1.0), Some(1))]
    #[case(Some(59.0), Some(1))]
    #[case(Some(60.0), Some(1))]
    #[case(Some(61.0), Some(2))]
    #[case(Some(125.0), Some(3))]
    #[case(Some(60.9), Some(1))]
    #[case(Some(0.5), Some(0))]
    #[case(Some(7200.0), Some(120))]
    fn test_seconds_to_minutes(#[case] seconds: Option<f64>, #[case] expected: Option<i64>) {
        assert_eq!(expected, seconds_to_minutes(seconds));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(-1.0), Some(-1))]
    #[case(Some(0.0), Some(0))]
    #[case(Some(3.0), Some(180))]
    #[case(Some(2.9), Some(120))]
    #[case(Some(45.0), Some(2700))]
    #[case(Some(1e18), Some(i64::MAX))]
    #[case(Some(-1e18), Some(i64::MIN))]
    #[case(Some(f64::MAX), Some(i64::MAX))]
    fn test_minutes_to_seconds(#[case] minutes: Option<f64>, #[case] expected: Option<i64>) {
        assert_eq!(expected, minutes_to_seconds(minutes));
    }

    #[test]
    fn round_trip_rounds_up_to_full_minutes() {
        let minutes = seconds_to_minutes(Some(125.0));
        assert_eq!(Some(180), minutes_to_seconds(minutes.map(|m| m as f64)));
        assert_ne!(Some(125), minutes_to_seconds(minutes.map(|m| m as f64)));
    }

    #[test]
    fn round_trip_keeps_full_minutes() {
        for seconds in (0..=72000).step_by(1800) {
            let minutes = seconds_to_minutes(Some(seconds as f64));
            assert_eq!(Some(seconds), minutes_to_seconds(minutes.map(|m| m as f64)));
        }
    }

    #[test]
    fn sentinel_survives_round_trip() {
        let minutes = seconds_to_minutes(Some(-1.0));
        assert_eq!(Some(-1), minutes_to_seconds(minutes.map(|m| m as f64)));
    }
}
