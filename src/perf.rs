//! Run-time, memory and count formatting for the stderr summary.

use std::time::Duration;

/// Formats a duration as HH:MM:SS.d (tenths of a second).
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs();
    let tenths = d.subsec_millis() / 100;
    format!(
        "{:02}:{:02}:{:02}.{tenths}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Peak resident set size of this process in bytes, when the platform reports it.
#[must_use]
pub fn peak_memory_bytes() -> Option<u64> {
    #[cfg(any(target_os = "macos", target_os = "linux"))]
    {
        use std::mem::MaybeUninit;
        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        // SAFETY: RUSAGE_SELF with a pointer to properly aligned, writable storage.
        if unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) } == 0 {
            // SAFETY: getrusage succeeded, so the struct is initialized.
            let max_rss = unsafe { usage.assume_init() }.ru_maxrss as u64;
            // macOS reports bytes, Linux reports kilobytes
            let scale = if cfg!(target_os = "macos") { 1 } else { 1024 };
            return Some(max_rss * scale);
        }
    }
    None
}

/// Formats a byte count as B, KB, MB or GB with one decimal.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Formats a count with thousands separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a throughput such as `1,234,567 rows/s`.
#[must_use]
pub fn format_rate(count: u64, elapsed: Duration, unit: &str) -> String {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return format!("- {unit}/s");
    }
    format!("{} {unit}/s", format_count((count as f64 / secs) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_drops_below_tenths() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.0");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:00:59.9");
        assert_eq!(
            format_elapsed(Duration::from_secs(25 * 3600 + 7 * 60 + 3)),
            "25:07:03.0"
        );
    }

    #[test]
    fn bytes_pick_largest_unit_below_1024() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(750 * 1024 * 1024), "750.0 MB");
        // GB is the largest unit
        assert_eq!(format_bytes(2048 * 1024 * 1024 * 1024), "2048.0 GB");
    }

    #[test]
    fn format_count_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn format_rate_basic() {
        assert_eq!(
            format_rate(3000, Duration::from_secs(2), "rows"),
            "1,500 rows/s"
        );
        assert_eq!(format_rate(10, Duration::ZERO, "rows"), "- rows/s");
    }

    #[test]
    fn peak_memory_reported() {
        if cfg!(any(target_os = "macos", target_os = "linux")) {
            assert!(peak_memory_bytes().is_some_and(|b| b > 0));
        }
    }
}
