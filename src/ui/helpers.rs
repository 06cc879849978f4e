//! Shared rendering utilities and helpers.
//!
//! Low-level helpers used across UI components: cursor positioning, title
//! match highlighting, and width-aware text layout.
//!
//! All widths are measured in characters, not bytes, so titles such as
//! "Émile" pad correctly.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::ui::helpers::wrap_text;
//!
//! let lines = wrap_text("Captain Ahab's obsessive hunt for the white whale", 20);
//! assert_eq!(lines[0], "Captain Ahab's");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in characters.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Renders text with highlighted character ranges for title matches.
///
/// Highlighted sections use the match highlight colors unless the row is
/// selected, in which case the selection colors take precedence and the text
/// is printed plainly.
///
/// Ranges use character indices `(start, end)` with exclusive end.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Splits `text` into lines of at most `width` characters, breaking on spaces.
///
/// Words longer than `width` are split mid-word.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if line.is_empty() { text_width(&word) } else { text_width(&line) + 1 + text_width(&word) };
        if needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(text_width("←/→"), 3);
    }
}
