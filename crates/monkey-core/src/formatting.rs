/// Placeholder shown for optional fields that carry no value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a whole number with thousands separators.
///
/// # Examples
///
/// ```
/// use monkey_core::formatting::format_number;
///
/// assert_eq!(format_number(0), "0");
/// assert_eq!(format_number(7_000), "7,000");
/// assert_eq!(format_number(25_000_000), "25,000,000");
/// ```
pub fn format_number(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format an optional coordinate with four decimal places, or `N/A`.
///
/// # Examples
///
/// ```
/// use monkey_core::formatting::format_coordinate;
///
/// assert_eq!(format_coordinate(Some(9.7489)), "9.7489");
/// assert_eq!(format_coordinate(Some(-1.0)), "-1.0000");
/// assert_eq!(format_coordinate(None), "N/A");
/// ```
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Return the text itself, or `N/A` when absent or blank.
pub fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
