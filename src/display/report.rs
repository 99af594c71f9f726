//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the overview, analytics and list
//! views.

/// Round to `decimals` places with ties away from zero (`{:.N}` alone
/// rounds ties to even)
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Format an amount with the currency symbol and two decimals
pub fn format_money(value: f64, symbol: &str) -> String {
    let rounded = round_to(value, 2);
    if rounded < 0.0 {
        format!("-{}{:.2}", symbol, -rounded)
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// Format an amount with color hints for terminal display
pub fn format_money_colored(value: f64, symbol: &str) -> String {
    let text = format_money(value, symbol);
    if value < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if value > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a ratio percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", round_to(pct, 1))
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// A label padded with dots up to `width`, followed by a value
pub fn dotted_line(label: &str, value: &str, width: usize) -> String {
    let len = label.chars().count();
    let dots = if len + 2 >= width { 1 } else { width - len - 1 };
    format!("{} {} {}", label, ".".repeat(dots), value)
}
