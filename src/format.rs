//! Display formatting helpers.

/// Format a purse as US dollars with thousands separators and no cents,
/// e.g. `1234567` -> `"$1,234,567"`.
pub fn format_purse(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
