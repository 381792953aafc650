/// Formats an elapsed duration as compact text such as `350ms`, `4.2s`,
/// `3m7.25s` or `1h0m3s`.
///
/// Negative durations render as `0s`.
pub fn format_elapsed(elapsed: chrono::Duration) -> String {
    let elapsed = elapsed.to_std().unwrap_or_default();
    let nanos = elapsed.as_nanos();

    match nanos {
        0 => "0s".to_string(),
        1..=999 => format!("{}ns", nanos),
        1_000..=999_999 => format!("{}µs", fraction(nanos, 1_000)),
        1_000_000..=999_999_999 => format!("{}ms", fraction(nanos, 1_000_000)),
        _ => {
            let total = elapsed.as_secs();
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let seconds = fraction(
                u128::from(total % 60) * 1_000_000_000 + u128::from(elapsed.subsec_nanos()),
                1_000_000_000,
            );

            if hours > 0 {
                format!("{}h{}m{}s", hours, minutes, seconds)
            } else if minutes > 0 {
                format!("{}m{}s", minutes, seconds)
            } else {
                format!("{}s", seconds)
            }
        }
    }
}

// `value / unit` as a decimal with trailing zeros removed.
fn fraction(value: u128, unit: u128) -> String {
    let whole = value / unit;
    let rest = value % unit;
    if rest == 0 {
        return whole.to_string();
    }

    let width = unit.to_string().len() - 1;
    let digits = format!("{:0width$}", rest, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
