//! Floor-area extraction from generated proposal text.
//!
//! Extraction and estimation are deliberately separate functions: the regex
//! scan returns an optional figure and the deterministic fallback is its own
//! branch, so each is testable on its own.

use regex::Regex;
use std::sync::OnceLock;

static FLOOR_AREA_RE: OnceLock<Regex> = OnceLock::new();

fn floor_area_re() -> &'static Regex {
    // First integer following a 延床面積 label and followed by a m² unit
    // marker. `.` does not cross lines, so label and figure must share one.
    FLOOR_AREA_RE.get_or_init(|| {
        Regex::new(r"延床面積.*?([0-9]+)\s*(?:㎡|m²|m2)").expect("floor-area regex is valid")
    })
}

/// Scans generated text for a labeled floor-area figure. Returns the first
/// match, or None when the text carries no recognizable figure.
pub fn extract_floor_area(text: &str) -> Option<u64> {
    floor_area_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Deterministic estimate used when extraction finds nothing:
/// floor(site_area × floor_area_ratio / 100). Always succeeds — the inputs
/// are validated as finite and non-negative before the pipeline runs.
pub fn fallback_floor_area(site_area_m2: f64, floor_area_ratio_pct: f64) -> u64 {
    (site_area_m2 * floor_area_ratio_pct / 100.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_labeled_figure() {
        assert_eq!(extract_floor_area("延床面積：120㎡"), Some(120));
    }

    #[test]
    fn test_extracts_first_figure_when_text_has_several() {
        let text = "2. 延床面積（概算）：約300㎡です。\n参考：延床面積 500㎡ の例もあります。";
        assert_eq!(extract_floor_area(text), Some(300));
    }

    #[test]
    fn test_accepts_ascii_unit_spellings() {
        assert_eq!(extract_floor_area("延床面積は 240 m² 程度"), Some(240));
        assert_eq!(extract_floor_area("延床面積: 180m2"), Some(180));
    }

    #[test]
    fn test_label_and_figure_must_share_a_line() {
        let text = "延床面積は以下の通り。\n300㎡";
        assert_eq!(extract_floor_area(text), None);
    }

    #[test]
    fn test_no_label_means_no_match() {
        assert_eq!(extract_floor_area("敷地面積：150㎡"), None);
        assert_eq!(extract_floor_area("提案文のみで数値なし"), None);
    }

    #[test]
    fn test_figure_without_unit_means_no_match() {
        assert_eq!(extract_floor_area("延床面積：300"), None);
    }

    #[test]
    fn test_fallback_is_floor_of_area_times_ratio() {
        assert_eq!(fallback_floor_area(150.0, 200.0), 300);
        assert_eq!(fallback_floor_area(99.5, 150.0), 149); // 149.25 floors to 149
        assert_eq!(fallback_floor_area(100.0, 0.0), 0);
    }
}
