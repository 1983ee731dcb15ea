//! Display formatting helpers
//!
//! The backend pre-formats most strings; these cover the few values the
//! client renders itself (chart labels, record counts, severity).

/// Format a whole-dollar value the way the chart prints small amounts:
/// integers without decimals, anything else with the shortest exact form
fn plain_dollars(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${:.0}", value)
    } else {
        format!("${}", value)
    }
}

/// Y-axis tick label: `$2.5M`, `$4.2K`, `$500`
pub fn axis_tick_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        plain_dollars(value)
    }
}

/// Bar tooltip label: `$2.50 million`, `$4.20 thousand`, `$500`
pub fn tooltip_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2} million", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2} thousand", value / 1_000.0)
    } else {
        plain_dollars(value)
    }
}

/// Group digits in threes: `1234567` -> `1,234,567`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
