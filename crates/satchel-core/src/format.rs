//! Display formatting helpers.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display.
///
/// Binary divisor, at most one decimal place with a trailing zero trimmed:
/// `0` → `"0 Bytes"`, `2048` → `"2 KB"`, `500000` → `"488.3 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let unit = UNITS[exponent];

    // Render through tenths so "2.0" collapses to "2" deterministically.
    let tenths = (value * 10.0).round() as u64;
    if tenths % 10 == 0 {
        format!("{} {unit}", tenths / 10)
    } else {
        format!("{}.{} {unit}", tenths / 10, tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_whole_kilobytes_trim_decimal() {
        assert_eq!(format_file_size(2048), "2 KB");
    }

    #[test]
    fn test_fractional_kilobytes_keep_one_decimal() {
        assert_eq!(format_file_size(500_000), "488.3 KB");
    }

    #[test]
    fn test_sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_larger_units() {
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }
}
