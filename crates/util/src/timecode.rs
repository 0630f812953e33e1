//! Clock-style time text for playback displays.

/// Formats a second count as `M:SS`, with minutes unpadded and seconds
/// zero-padded to two digits.
///
/// Non-finite input renders as the literal `"NaN:NaN"`. That is what a media
/// source reports for its duration before anything is loaded, and the text is
/// shown as-is until the source becomes ready.
pub fn format_clock(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return "NaN:NaN".to_owned();
    }

    let minutes = (total_seconds / 60.0).floor();
    let seconds = (total_seconds % 60.0).floor();
    format!("{minutes:.0}:{seconds:02.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_zero_zero_zero() {
        assert_eq!(format_clock(0.0), "0:00");
    }

    #[test]
    fn seconds_below_ten_are_zero_padded() {
        assert_eq!(format_clock(65.0), "1:05");
    }

    #[test]
    fn whole_minutes_show_double_zero_seconds() {
        assert_eq!(format_clock(600.0), "10:00");
    }

    #[test]
    fn minutes_are_not_padded() {
        assert_eq!(format_clock(59.0), "0:59");
        assert_eq!(format_clock(3725.0), "62:05");
    }

    #[test]
    fn fractional_seconds_floor() {
        assert_eq!(format_clock(59.9), "0:59");
    }

    #[test]
    fn non_finite_input_renders_nan_text() {
        assert_eq!(format_clock(f64::NAN), "NaN:NaN");
        assert_eq!(format_clock(f64::INFINITY), "NaN:NaN");
    }
}
