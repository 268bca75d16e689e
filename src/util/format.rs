//! Number formatting for axis ticks and tooltips.

/// Rounds to the nearest integer and groups thousands with commas.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Compact tick label: `80000` -> `80k`, `2500` -> `2.5k`, `900` -> `900`.
pub fn format_compact(value: f64) -> String {
    if value.abs() >= 1000.0 {
        let thousands = value / 1000.0;
        if thousands.fract() == 0.0 {
            format!("{}k", thousands as i64)
        } else {
            format!("{:.1}k", thousands)
        }
    } else {
        format_thousands(value)
    }
}
