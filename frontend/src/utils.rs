pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

/// Reads the integer prefix of `input` the way browsers parse loose numeric
/// text: leading whitespace, an optional sign, then decimal digits. Returns
/// `None` when no digit follows.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(digit as i64);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

// Compacts counts into K/M steps with one decimal
pub fn format_count(count: Option<i64>) -> String {
    let Some(number) = count else {
        return "0".to_string();
    };

    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{:.1}K", number as f64 / 1_000.0)
    } else {
        number.to_string()
    }
}
