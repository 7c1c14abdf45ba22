//! Sentence-to-bullets conversion for free-text descriptions.
//!
//! Splits on a period followed by whitespace and a capital letter, or a period
//! at the end of the string. This is a heuristic, not a sentence tokenizer:
//! abbreviations like "U.S. Government" split before the capitalized word.
//! Callers rely on that exact behavior, so do not tighten the boundary.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.\s+[A-Z]").unwrap()
});

/// Output shape for [`convert_to_bullet_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletFormat {
    #[default]
    Markdown,
    Array,
    Html,
}

/// A converted bullet list in the requested format.
#[derive(Debug, Clone, PartialEq)]
pub enum BulletOutput {
    Text(String),
    List(Vec<String>),
}

/// Splits `text` into sentence fragments, trimmed, with a single trailing
/// period stripped and empty fragments discarded.
pub fn sentence_bullets(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut fragments: Vec<&str> = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // Cut just before the period; the following whitespace is trimmed away.
        fragments.push(&text[start..m.start()]);
        start = m.start() + 1;
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(|s| {
            let s = s.trim();
            s.strip_suffix('.').unwrap_or(s).trim()
        })
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a description into bullet points in the given format.
pub fn convert_to_bullet_points(text: &str, format: BulletFormat) -> BulletOutput {
    let sentences = sentence_bullets(text);

    match format {
        BulletFormat::Array => BulletOutput::List(sentences),
        BulletFormat::Html => {
            let items: Vec<String> = sentences
                .iter()
                .map(|s| format!("  <li>{s}</li>"))
                .collect();
            BulletOutput::Text(format!("<ul>\n{}\n</ul>", items.join("\n")))
        }
        BulletFormat::Markdown => {
            let lines: Vec<String> = sentences.iter().map(|s| format!("- {s}")).collect();
            BulletOutput::Text(lines.join("\n"))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
