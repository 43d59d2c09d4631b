//! Shared number formatting.

/// Format a coordinate compactly: integers without a fraction, everything
/// else rounded to four decimals with trailing zeros removed.
pub fn format_coord(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let s = format!("{:.4}", val);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords() {
        assert_eq!(format_coord(4.0), "4");
        assert_eq!(format_coord(-1.0), "-1");
        assert_eq!(format_coord(0.1 + 0.2), "0.3");
        assert_eq!(format_coord(6.123e-17), "0");
        assert_eq!(format_coord(-6.123e-17), "0");
        assert_eq!(format_coord(-1.1), "-1.1");
        assert_eq!(format_coord(f64::NAN), "NaN");
    }

    #[test]
    fn axis_labels() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(4.0), "4.0");
        assert_eq!(format_axis_label(-1.1), "-1.1");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(250.0), "250");
    }
}
