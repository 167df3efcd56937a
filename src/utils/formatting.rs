//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (accents and emoji count by display width).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// A horizontal rule made of the configured separator character.
pub fn separator(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}

pub fn check_mark(value: bool) -> &'static str {
    if value { "✔" } else { "✘" }
}

/// Read an on/off switch from the command line.
pub fn parse_switch(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "on" | "yes" | "y" | "si" | "sí" | "true" | "1" => Some(true),
        "off" | "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}
