//! Approximate text metrics for line-wrapping Japanese proposal text.
//!
//! Widths are in em units (relative to font size). Fullwidth characters
//! (kanji, kana, fullwidth punctuation) count as 1 em, halfwidth ASCII as
//! 0.5 em. That approximation is within a few percent for gothic CJK fonts
//! and is absorbed by the page margins.
#![allow(dead_code)]

/// Width of one character in em units.
pub fn char_width_em(c: char) -> f32 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        0.5
    } else {
        1.0
    }
}

/// Measures the rendered width of a string in em units.
pub fn measure_str(s: &str) -> f32 {
    s.chars().map(char_width_em).sum()
}

/// Greedy character wrap at `max_width_em`. Existing newlines are hard
/// breaks; Japanese text has no word boundaries to respect, so the wrap is
/// per character. Empty input lines are preserved as blank output lines.
pub fn wrap_text(text: &str, max_width_em: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end_matches('\r');
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0.0_f32;
        for c in raw_line.chars() {
            let w = char_width_em(c);
            if !current.is_empty() && current_width + w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += w;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_halfwidth_cjk_is_fullwidth() {
        assert_eq!(char_width_em('A'), 0.5);
        assert_eq!(char_width_em(' '), 0.5);
        assert_eq!(char_width_em('建'), 1.0);
        assert_eq!(char_width_em('㎡'), 1.0);
    }

    #[test]
    fn test_measure_mixed_string() {
        // 2 fullwidth + 3 halfwidth = 3.5 em
        assert!((measure_str("延床120") - 3.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wrap_respects_hard_newlines() {
        let lines = wrap_text("一行目\n二行目", 40.0);
        assert_eq!(lines, vec!["一行目".to_string(), "二行目".to_string()]);
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        let lines = wrap_text("上\n\n下", 40.0);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_wrap_breaks_long_cjk_runs() {
        let text = "あ".repeat(25);
        let lines = wrap_text(&text, 10.0);
        assert_eq!(lines.len(), 3); // 10 + 10 + 5
        assert_eq!(lines[0].chars().count(), 10);
        assert_eq!(lines[2].chars().count(), 5);
    }

    #[test]
    fn test_wrapped_lines_never_exceed_width() {
        let text = "木造はコストと工期に優れ、abc123 など半角も混在する長文テキスト。".repeat(4);
        for line in wrap_text(&text, 18.0) {
            assert!(measure_str(&line) <= 18.0);
        }
    }

    #[test]
    fn test_single_oversized_char_still_emitted() {
        // max width below one char must not loop or drop the char
        let lines = wrap_text("広", 0.5);
        assert_eq!(lines, vec!["広".to_string()]);
    }
}
