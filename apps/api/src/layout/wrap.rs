//! Greedy word wrap against measured glyph widths.
//!
//! Lines break only at word boundaries. A word is whatever `split_whitespace`
//! yields, so whitespace runs collapse to single spaces in the output. A single
//! word wider than the column is kept whole and overflows; the caller draws it
//! anyway.

use crate::layout::font_metrics::{get_metrics, FontId};

/// Wraps `text` into lines no wider than `max_width_pt` when rendered with
/// `font` at `size_pt`.
///
/// Greedy accumulation: each word is tentatively appended to the current line
/// with a single space; if the candidate no longer fits, the current line is
/// finalized and the word starts the next line. Empty input yields zero lines.
pub fn wrap_text(text: &str, font: FontId, size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let metrics = get_metrics(font);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_width = metrics.text_width(&current, size_pt)
            + metrics.space_width * size_pt
            + metrics.text_width(word, size_pt);

        if candidate_width <= max_width_pt {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::get_metrics;

    #[test]
    fn test_empty_input_yields_no_lines() {
        let lines = wrap_text("", FontId::Helvetica, 11.0, 400.0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_whitespace_only_yields_no_lines() {
        let lines = wrap_text("   \t  ", FontId::Helvetica, 11.0, 400.0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = wrap_text("Led a team of 5", FontId::Helvetica, 11.0, 400.0);
        assert_eq!(lines, vec!["Led a team of 5"]);
    }

    #[test]
    fn test_rejoined_lines_reproduce_normalized_input() {
        let text = "Built  and   shipped a distributed ingestion pipeline handling millions of events per day";
        let lines = wrap_text(text, FontId::TimesRoman, 11.0, 180.0);
        let rejoined = lines.join(" ");
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(
            rejoined, normalized,
            "wrapping must not add, drop, or reorder words"
        );
    }

    #[test]
    fn test_every_line_fits_or_is_a_single_word() {
        let text = "Designed implemented and operated several latency sensitive services in production";
        let size = 11.0;
        let max_width = 150.0;
        let metrics = get_metrics(FontId::Helvetica);

        for line in wrap_text(text, FontId::Helvetica, size, max_width) {
            let fits = metrics.text_width(&line, size) <= max_width;
            let single_word = !line.contains(' ');
            assert!(
                fits || single_word,
                "line {line:?} is wider than the column yet has multiple words"
            );
        }
    }

    #[test]
    fn test_single_overwide_word_kept_whole() {
        let word = "Supercalifragilisticexpialidocious";
        let lines = wrap_text(word, FontId::Helvetica, 11.0, 20.0);
        assert_eq!(lines, vec![word], "over-wide word must not be split");
    }

    #[test]
    fn test_narrow_column_one_word_per_line() {
        let lines = wrap_text("alpha beta gamma", FontId::Helvetica, 11.0, 10.0);
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_space_width_matches_table_entry() {
        // The candidate-width computation charges `space_width` for the
        // joining space, so it must agree with measuring " " directly.
        for font in FontId::ALL {
            let metrics = get_metrics(font);
            let direct = metrics.text_width(" ", 11.0);
            let field = metrics.space_width * 11.0;
            assert!(
                (direct - field).abs() < 1e-6,
                "space_width diverges from the width table for {font:?}"
            );
        }
    }
}
