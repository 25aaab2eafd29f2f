// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Commit Awards CLI.
//!
//! This module provides color support detection and terminal-width aware
//! text wrapping.

use std::env;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Continuation lines are indented by `indent` spaces so wrapped values line
/// up under a label column.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation level (in spaces)
///
/// # Returns
/// The wrapped text
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_len + 1 + word.chars().count() <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_terminal_width_returns_positive() {
        assert!(get_terminal_width() > 0);
    }

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_to_width("short", 0, 80), "short");
    }

    #[test]
    fn test_wrap_long_line_indents_continuations() {
        let wrapped = wrap_to_width("alpha beta gamma delta epsilon", 4, 20);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["alpha beta gamma", "    delta epsilon"]);
    }

    #[test]
    fn test_wrap_skips_tiny_widths() {
        assert_eq!(wrap_to_width("a b c", 5, 8), "a b c");
    }
}
