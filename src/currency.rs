//! Money input coercion and formatting for the fixed pt-BR locale.

/// Coerces free-form currency text into a value.
///
/// Characters outside digits, `.` and `,` are stripped and a decimal comma is
/// normalized to a dot. Input that still fails to parse becomes `0.0` — the
/// form always submits a valid number.
pub fn parse_lenient(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let normalized = cleaned.replace(',', ".");
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Renders a non-negative amount as `1.234,56`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, grouped, frac)
}
