//! Russian-locale number and size formatting for labels and panels.

/// Group separator used by the ru-RU locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';
const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable size: one decimal below 10 units, none above.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut power = 0usize;
    while power + 1 < BYTE_UNITS.len() && bytes >= 1024u64.pow(power as u32 + 1) {
        power += 1;
    }
    let value = bytes as f64 / 1024f64.powi(power as i32);
    let digits = if value >= 10.0 { 0 } else { 1 };
    format!("{value:.digits$} {}", BYTE_UNITS[power])
}

/// Integer with ru-RU digit grouping, e.g. `1 234 567`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Row counts and other non-negative integers.
pub fn format_count(value: u64) -> String {
    group_digits(i64::try_from(value).unwrap_or(i64::MAX))
}

/// Rounded amount in rubles, e.g. `20 000 ₽`.
pub fn format_rubles(value: f64) -> String {
    format!("{} ₽", group_digits(round_to_i64(value)))
}

/// Amount with up to two fraction digits, e.g. `1 234,5 ₽`.
pub fn format_rubles_precise(value: f64) -> String {
    format!("{} ₽", format_decimal(value, 2))
}

/// Number with grouping and at most `max_fraction` fraction digits, trailing
/// zeros trimmed.
pub fn format_decimal(value: f64, max_fraction: u32) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let scale = 10f64.powi(max_fraction as i32);
    let scaled = (value.abs() * scale).round();
    let whole = (scaled / scale).trunc();
    let fraction = (scaled - whole * scale).round() as u64;
    let sign = if value < 0.0 && scaled > 0.0 { "-" } else { "" };
    let mut out = format!("{sign}{}", group_digits(whole as i64));
    if fraction > 0 {
        let digits = format!("{fraction:0width$}", width = max_fraction as usize);
        out.push(DECIMAL_SEPARATOR);
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn round_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        text.replace(GROUP_SEPARATOR, " ")
    }

    #[test]
    fn byte_sizes_switch_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(5), "5.0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(20 * 1024 * 1024), "20 MB");
        assert_eq!(format_bytes(5 * 1024u64.pow(4)), "5120 GB");
    }

    #[test]
    fn digits_are_grouped_by_thousands() {
        assert_eq!(plain(&group_digits(0)), "0");
        assert_eq!(plain(&group_digits(999)), "999");
        assert_eq!(plain(&group_digits(1234)), "1 234");
        assert_eq!(plain(&group_digits(-1_234_567)), "-1 234 567");
    }

    #[test]
    fn rubles_are_rounded() {
        assert_eq!(plain(&format_rubles(20_000.4)), "20 000 ₽");
        assert_eq!(plain(&format_rubles(99.5)), "100 ₽");
        assert_eq!(plain(&format_rubles(f64::NAN)), "0 ₽");
    }

    #[test]
    fn decimals_keep_up_to_two_digits() {
        assert_eq!(plain(&format_decimal(1234.5, 2)), "1 234,5");
        assert_eq!(plain(&format_decimal(10.0, 2)), "10");
        assert_eq!(plain(&format_decimal(0.126, 2)), "0,13");
        assert_eq!(plain(&format_decimal(-3.05, 2)), "-3,05");
        assert_eq!(plain(&format_rubles_precise(45_210.987)), "45 210,99 ₽");
    }
}
