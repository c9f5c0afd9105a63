//! Text formatting for the volatile fields.

const KIB: i64 = 1024;
const MIB: i64 = 1024 * 1024;
const GIB: i64 = 1024 * 1024 * 1024;

/// Byte count per second, right-justified in three digits plus a unit.
///
/// Values of a billion or more are divided by 1024³ yet still carry the `M`
/// unit. Negative deltas (counter reset) fall below every threshold and are
/// shown as bytes.
pub fn byte_rate(bytes: i64) -> String {
    let (value, unit) = if bytes > 999_999_999 {
        (bytes / GIB, 'M')
    } else if bytes > 999_999 {
        (bytes / MIB, 'M')
    } else if bytes > 999 {
        (bytes / KIB, 'K')
    } else {
        (bytes, 'B')
    };
    format!("{:>3}{}", value, unit)
}

pub fn percent(value: i64) -> String {
    format!("{:>3}%", value)
}

/// `D:HH:MMD` once the host has been up a day, ` HH:MM:SSH` before that.
pub fn uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let rest = seconds % 86_400;
    let hours = rest / 3600;
    let rest = rest % 3600;
    if days > 0 {
        format!("{:>3}:{:02}:{:02}D", days, hours, rest / 60)
    } else {
        format!(" {:02}:{:02}:{:02}H", hours, rest / 60, rest % 60)
    }
}

/// Whole degrees from a millidegree reading.
pub fn temperature(millidegrees: i64) -> String {
    format!("{:>2}", millidegrees / 1000)
}

/// File system capacity with one decimal: MiB, or GiB/TiB once the value
/// in the smaller unit exceeds 100.
pub fn capacity(bytes: u64) -> String {
    let mut size = bytes as f64 / (1024.0 * 1024.0);
    let mut unit = 'M';
    if size > 100.0 {
        size /= 1024.0;
        unit = 'G';
    }
    if size > 100.0 {
        size /= 1024.0;
        unit = 'T';
    }
    format!("{:>3.1}{}", size, unit)
}

/// Load average as a share of four cores.
pub fn load_percent(load_average: f64) -> i64 {
    (load_average * 100.0 / 4.0) as i64
}

/// Used memory as an integer percentage.
pub fn memory_percent(total_kb: u64, available_kb: u64) -> Option<i64> {
    if total_kb == 0 {
        return None;
    }
    Some(100 - (available_kb as i64 * 100 / total_kb as i64))
}

/// Used blocks as an integer percentage.
pub fn usage_percent(blocks: u64, free_blocks: u64) -> Option<i64> {
    if blocks == 0 {
        return None;
    }
    Some((blocks.saturating_sub(free_blocks) * 100 / blocks) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn byte_rate_thresholds() {
        assert_eq!(byte_rate(0), "  0B");
        assert_eq!(byte_rate(500), "500B");
        assert_eq!(byte_rate(999), "999B");
        assert_eq!(byte_rate(1000), "  0K");
        assert_eq!(byte_rate(1500), "  1K");
        assert_eq!(byte_rate(999_999), "976K");
        assert_eq!(byte_rate(1_500_000), "  1M");
        assert_eq!(byte_rate(999_999_999), "953M");
    }

    #[test]
    fn byte_rate_gigabytes_keep_mega_unit() {
        // Known quirk: divided by 1024³, still labelled M.
        assert_eq!(byte_rate(1_500_000_000), "  1M");
        assert_eq!(byte_rate(5 * GIB), "  5M");
    }

    #[test]
    fn byte_rate_passes_negative_deltas_through() {
        assert_eq!(byte_rate(800 - 1000), "-200B");
        assert_eq!(byte_rate(-5_000_000), "-5000000B");
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(7), "  7%");
        assert_eq!(percent(100), "100%");
        assert_eq!(load_percent(1.0), 25);
        assert_eq!(load_percent(0.52), 13);
        assert_eq!(memory_percent(4_000_000, 3_000_000), Some(25));
        assert_eq!(memory_percent(0, 0), None);
        assert_eq!(usage_percent(1000, 250), Some(75));
        assert_eq!(usage_percent(0, 0), None);
    }

    #[test]
    fn uptime_layouts() {
        assert_eq!(uptime(90_061), "  1:01:01D");
        assert_eq!(uptime(3661), " 01:01:01H");
        assert_eq!(uptime(59), " 00:00:59H");
        assert_eq!(uptime(86_400 * 123 + 3600 * 23 + 60 * 59), "123:23:59D");
    }

    #[test]
    fn temperature_in_whole_degrees() {
        assert_eq!(temperature(48_312), "48");
        assert_eq!(temperature(9_500), " 9");
    }

    #[test]
    fn capacity_units() {
        assert_eq!(capacity(50 * 1024 * 1024), "50.0M");
        assert_eq!(capacity(29_000_000_000), "27.0G");
        assert_eq!(capacity(2_000_000_000_000), "1.8T");
        assert_eq!(capacity(0), "0.0M");
    }

    proptest! {
        #[test]
        fn byte_rate_always_ends_with_unit(bytes in 0i64..i64::MAX / 2) {
            let text = byte_rate(bytes);
            let unit = text.chars().last().unwrap();
            prop_assert!(matches!(unit, 'B' | 'K' | 'M'));
            prop_assert!(text.len() >= 4);
        }

        #[test]
        fn byte_rate_fits_field_below_a_terabyte(bytes in 0i64..1_000_000_000_000) {
            prop_assert_eq!(byte_rate(bytes).len(), 4);
        }

        #[test]
        fn uptime_is_ten_wide_below_a_thousand_days(seconds in 0u64..86_400 * 1000) {
            prop_assert_eq!(uptime(seconds).len(), 10);
        }
    }
}
