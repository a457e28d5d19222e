//! Number formatting for metric cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes with commas: `1450` -> `"1,450"`.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed trend with one decimal: `0.3` -> `"+0.3"`, `-0.8` -> `"-0.8"`.
#[must_use]
pub fn signed_decimal(value: f64) -> String {
    if value > 0.0 { format!("+{value:.1}") } else { format!("{value:.1}") }
}

/// Signed integer trend: `23` -> `"+23"`, `-5` -> `"-5"`.
#[must_use]
pub fn signed_count(value: i32) -> String {
    if value > 0 { format!("+{value}") } else { value.to_string() }
}

#[must_use]
pub fn percent_one_decimal(value: f64) -> String {
    format!("{value:.1}%")
}

/// Trim a trailing `.0` so table values read like `8` rather than `8.0`.
#[must_use]
pub fn compact_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    if let Some(whole) = text.strip_suffix(".0") { whole.to_owned() } else { text }
}
