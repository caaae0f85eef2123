//! SRT timestamp parsing and formatting.
//!
//! Timestamps look like `HH:MM:SS,mmm` or `MM:SS,mmm`. Parsing is lenient and
//! never fails: missing pieces count as zero.

/// Parse an SRT timestamp into seconds.
///
/// The part before the first comma is split on `:`:
/// - 3 parts are hours, minutes, seconds
/// - 2 parts are minutes, seconds (hours = 0)
/// - any other count yields zero for all three
///
/// The part after the comma is read as whole milliseconds and defaults to 0
/// when absent or not a number. The result keeps full `f64` precision.
///
/// # Examples
///
/// ```
/// use srtsync::subtitle::parse_timestamp;
///
/// assert_eq!(parse_timestamp("00:01:02,500"), 62.5);
/// assert_eq!(parse_timestamp("01:02,250"), 62.25);
/// ```
pub fn parse_timestamp(timestamp: &str) -> f64 {
    let mut halves = timestamp.split(',');
    let hms = halves.next().unwrap_or("");
    let millis = halves.next().map(leading_integer).unwrap_or(0);

    let parts: Vec<f64> = hms.split(':').map(component).collect();
    let (h, m, s) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => (0.0, *m, *s),
        _ => (0.0, 0.0, 0.0),
    };

    h * 3600.0 + m * 60.0 + s + millis as f64 / 1000.0
}

/// Numeric value of one `H`, `M` or `S` component.
///
/// Follows JavaScript's string-to-number rules: blank is zero, `0x`/`0o`/`0b`
/// prefixes select a radix, and `Infinity` is the only spelled-out value.
/// Anything else that is not a decimal literal is NaN and poisons the total
/// rather than being silently treated as zero.
fn component(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    // Rust also accepts `inf` and `nan` spellings, which are not numbers here
    let is_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned `0x`, `0o` or `0b` literal. `None` when there is no such prefix.
fn radix_literal(raw: &str) -> Option<f64> {
    let radix = match raw.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // Digit-by-digit so long literals lose precision instead of overflowing
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    Some(value)
}

/// Leading decimal integer of `raw`, ignoring leading whitespace.
///
/// `"500"` → 500, `"250 "` → 250, `"12ab"` → 12, `""` / `"ab"` → 0.
fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

/// Format seconds as `MM:SS` for display.
///
/// Truncates toward zero; minutes are not wrapped into hours, so an hour and
/// a quarter reads `75:00`. Non-finite input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Format seconds as a full SRT timestamp (`HH:MM:SS,mmm`).
///
/// Rounds to the nearest millisecond. Negative and non-finite values clamp
/// to `00:00:00,000`.
pub fn format_timestamp(seconds: f64) -> String {
    let total_millis = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let millis = total_millis % 1000;
    let total_secs = total_millis / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}
