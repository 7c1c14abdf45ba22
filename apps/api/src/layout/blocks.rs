//! Line classification for the markdown-like input paths.
//!
//! Each trimmed input line maps to exactly one `ContentBlock` variant. Inline
//! `**bold**` markers are stripped textually; no alternate font is applied
//! mid-line.

/// A classified unit of input, ready for measurement and drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Top-level `# ` heading. Large, bold, centered.
    Title(String),
    /// `## ` (or deeper) heading. Bold, left-aligned.
    SectionHeader(String),
    /// `- ` or `* ` list line, bullet glyph plus indented wrapped text.
    BulletItem(String),
    /// Plain wrapped text.
    Paragraph(String),
    /// Pipe-delimited line near the top of the document, drawn centered.
    ContactLine(String),
    /// Empty line, rendered as a vertical spacer.
    Blank,
}

/// Removes `**` bold markers without applying any styling.
pub fn strip_bold_markers(s: &str) -> String {
    s.replace("**", "")
}

/// Classifies one logical input line.
///
/// `line_index` is the zero-based position of the line in the document;
/// `contact_line_threshold` is the number of leading lines within which a
/// pipe-containing paragraph becomes a centered `ContactLine`. A threshold of
/// 0 disables contact-line detection entirely.
pub fn classify_line(raw: &str, line_index: usize, contact_line_threshold: usize) -> ContentBlock {
    let line = raw.trim();

    if line.is_empty() {
        return ContentBlock::Blank;
    }

    if let Some(rest) = line.strip_prefix('#') {
        // One '#' is a title; two or more is a section header.
        let (deeper, text) = match rest.strip_prefix('#') {
            Some(tail) => (true, tail.trim_start_matches('#')),
            None => (false, rest),
        };
        let text = strip_bold_markers(text.trim());
        return if deeper {
            ContentBlock::SectionHeader(text)
        } else {
            ContentBlock::Title(text)
        };
    }

    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return ContentBlock::BulletItem(strip_bold_markers(rest.trim()));
    }

    if line.contains('|') && line_index < contact_line_threshold {
        return ContentBlock::ContactLine(strip_bold_markers(line));
    }

    ContentBlock::Paragraph(strip_bold_markers(line))
}

/// Classifies every line of a markdown-like document in order.
pub fn classify_document(text: &str, contact_line_threshold: usize) -> Vec<ContentBlock> {
    text.lines()
        .enumerate()
        .map(|(i, line)| classify_line(line, i, contact_line_threshold))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
