pub mod header_bar;
pub mod help_panel;
pub mod input;
pub mod page;
pub mod projects_panel;
pub mod sections;
pub mod status_bar;
pub mod theme;

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `max` display columns, marking the cut with an ellipsis.
pub fn fit_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|ch| {
            used += UnicodeWidthChar::width(*ch).unwrap_or(0);
            used <= budget
        })
        .collect();
    kept + "\u{2026}"
}

/// Greedy word wrap on display width. Words wider than `max` are truncated.
pub fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = fit_to_width(word, max);
        let cur_w = UnicodeWidthStr::width(current.as_str());
        let word_w = UnicodeWidthStr::width(word.as_str());
        if cur_w == 0 {
            current = word;
        } else if cur_w + 1 + word_w <= max {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// A `width` x `height` box centred in `area`, shrunk to fit when needed.
pub fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 10), "short");
        assert_eq!(fit_to_width("abcdefgh", 5), "abcd\u{2026}");
        assert_eq!(fit_to_width("abc", 1), "\u{2026}");
        // wide glyphs count two columns each
        assert_eq!(fit_to_width("\u{4f60}\u{597d}\u{4e16}\u{754c}", 5), "\u{4f60}\u{597d}\u{2026}");
    }

    #[test]
    fn test_popup_rect_centres_and_clamps() {
        let area = Rect::new(0, 1, 80, 20);
        assert_eq!(popup_rect(40, 10, area), Rect::new(20, 6, 40, 10));
        assert_eq!(popup_rect(100, 30, area), area);
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(wrap_words("   ", 10).is_empty());
        assert_eq!(wrap_words("abcdefghijkl", 5), vec!["abcd\u{2026}"]);
    }
}
