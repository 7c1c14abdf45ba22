//! Harvard-style resume renderer for markdown-like input.
//!
//! Serif (Times) fonts, upper-cased centered name, upper-cased section headers
//! underlined with a horizontal rule. Contact lines near the top of the input
//! are centered; everything else is left-aligned body text.

use crate::layout::blocks::{classify_document, ContentBlock};
use crate::layout::font_metrics::{get_metrics, FontId};
use crate::layout::page::{DocumentBuilder, LayoutDocument, PageGeometry, PageSize, BLACK};
use crate::layout::wrap::wrap_text;

const PAGE_MARGIN: f32 = 54.0;
const FONT_SIZE_NAME: f32 = 22.0;
const FONT_SIZE_SECTION_HEADER: f32 = 12.0;
const FONT_SIZE_BODY: f32 = 11.0;
const LINE_HEIGHT_BODY: f32 = 14.5;
const SPACING_AFTER_HEADER: f32 = 6.0;
const LIST_ITEM_SPACING: f32 = 4.0;
const BULLET_INDENT: f32 = 18.0;
const BULLET_TEXT_INDENT: f32 = 28.0;

fn geometry(size: PageSize) -> PageGeometry {
    PageGeometry {
        size,
        margin_top: PAGE_MARGIN,
        margin_bottom: PAGE_MARGIN,
        margin_side: PAGE_MARGIN,
        line_height: LINE_HEIGHT_BODY,
    }
}

/// Lays out a markdown resume.
///
/// `contact_line_threshold` is the number of leading input lines within which
/// pipe-delimited lines are treated as centered contact info.
pub fn build(content: &str, contact_line_threshold: usize, size: PageSize) -> LayoutDocument {
    let geo = geometry(size);
    let mut doc = DocumentBuilder::new(geo);
    let width = geo.size.width();
    let column = geo.column_width();

    for block in classify_document(content, contact_line_threshold) {
        match block {
            ContentBlock::Blank => {
                doc.advance(LINE_HEIGHT_BODY / 2.0);
            }

            ContentBlock::Title(text) => {
                let text = text.to_uppercase();
                doc.ensure_space(FONT_SIZE_NAME + 20.0);
                let text_width = get_metrics(FontId::TimesBold).text_width(&text, FONT_SIZE_NAME);
                doc.text(
                    text,
                    (width - text_width) / 2.0,
                    FontId::TimesBold,
                    FONT_SIZE_NAME,
                    BLACK,
                );
                doc.advance(FONT_SIZE_NAME + 10.0);
            }

            ContentBlock::SectionHeader(text) => {
                let text = text.to_uppercase();
                doc.ensure_space(40.0);
                doc.advance(5.0);
                doc.text(
                    text,
                    PAGE_MARGIN,
                    FontId::TimesBold,
                    FONT_SIZE_SECTION_HEADER,
                    BLACK,
                );
                let rule_y = doc.y() - 4.0;
                doc.rule(PAGE_MARGIN, width - PAGE_MARGIN, rule_y, 0.75, BLACK);
                doc.advance(FONT_SIZE_SECTION_HEADER + SPACING_AFTER_HEADER);
            }

            ContentBlock::BulletItem(text) => {
                let lines = wrap_text(
                    &text,
                    FontId::TimesRoman,
                    FONT_SIZE_BODY,
                    column - BULLET_TEXT_INDENT,
                );
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT_BODY + LIST_ITEM_SPACING);

                doc.text(
                    "\u{2022}",
                    PAGE_MARGIN + BULLET_INDENT,
                    FontId::TimesRoman,
                    FONT_SIZE_BODY,
                    BLACK,
                );
                for line in lines {
                    doc.text(
                        line,
                        PAGE_MARGIN + BULLET_TEXT_INDENT,
                        FontId::TimesRoman,
                        FONT_SIZE_BODY,
                        BLACK,
                    );
                    doc.advance(LINE_HEIGHT_BODY);
                }
                doc.advance(2.0);
            }

            ContentBlock::ContactLine(text) => {
                let lines = wrap_text(&text, FontId::TimesRoman, FONT_SIZE_BODY, column);
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT_BODY);

                for line in lines {
                    // Wrapped continuations without a pipe fall back to the
                    // margin; contact rows rarely wrap at all.
                    if line.contains('|') {
                        let line_width =
                            get_metrics(FontId::TimesRoman).text_width(&line, FONT_SIZE_BODY);
                        doc.text(
                            line,
                            (width - line_width) / 2.0,
                            FontId::TimesRoman,
                            FONT_SIZE_BODY,
                            BLACK,
                        );
                    } else {
                        doc.text(line, PAGE_MARGIN, FontId::TimesRoman, FONT_SIZE_BODY, BLACK);
                    }
                    doc.advance(LINE_HEIGHT_BODY);
                }
            }

            ContentBlock::Paragraph(text) => {
                let lines = wrap_text(&text, FontId::TimesRoman, FONT_SIZE_BODY, column);
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT_BODY);

                for line in lines {
                    doc.text(line, PAGE_MARGIN, FontId::TimesRoman, FONT_SIZE_BODY, BLACK);
                    doc.advance(LINE_HEIGHT_BODY);
                }
            }
        }
    }

    doc.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_single_empty_page() {
        let doc = build("", 10, PageSize::A4);
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.pages[0].texts.is_empty());
        assert!(doc.pages[0].rules.is_empty());
    }

    #[test]
    fn test_title_is_uppercased_and_centered() {
        let doc = build("# Jane Doe", 10, PageSize::A4);
        let op = &doc.pages[0].texts[0];
        assert_eq!(op.text, "JANE DOE");
        assert_eq!(op.font, FontId::TimesBold);
        assert_eq!(op.size, FONT_SIZE_NAME);
        assert!(op.x > PAGE_MARGIN, "title should be centered, not at the margin");
    }

    #[test]
    fn test_section_header_uppercased_with_rule() {
        let doc = build("## Experience", 10, PageSize::A4);
        let page = &doc.pages[0];
        assert_eq!(page.texts[0].text, "EXPERIENCE");
        assert_eq!(page.rules.len(), 1, "section header draws an underline rule");
        let rule = &page.rules[0];
        assert_eq!(rule.thickness, 0.75);
        assert_eq!(rule.y, page.texts[0].y - 4.0);
    }

    #[test]
    fn test_bullet_draws_glyph_and_indented_text() {
        let doc = build("- Shipped the thing", 10, PageSize::A4);
        let page = &doc.pages[0];
        assert_eq!(page.texts[0].text, "\u{2022}");
        assert_eq!(page.texts[0].x, PAGE_MARGIN + BULLET_INDENT);
        assert_eq!(page.texts[1].text, "Shipped the thing");
        assert_eq!(page.texts[1].x, PAGE_MARGIN + BULLET_TEXT_INDENT);
    }

    #[test]
    fn test_contact_line_centered_near_top() {
        let doc = build("# Jane Doe\na@b.com | (555) 555-5555", 10, PageSize::A4);
        let contact = &doc.pages[0].texts[1];
        assert!(contact.text.contains('|'));
        assert!(contact.x > PAGE_MARGIN, "contact line should be centered");
    }

    #[test]
    fn test_pipe_line_beyond_threshold_left_aligned() {
        let mut content = String::new();
        for _ in 0..12 {
            content.push_str("plain line\n");
        }
        content.push_str("a@b.com | more");
        let doc = build(&content, 10, PageSize::A4);
        let last = doc.pages[0].texts.last().unwrap();
        assert_eq!(last.x, PAGE_MARGIN, "pipe line past the threshold stays at the margin");
    }

    #[test]
    fn test_long_document_paginates() {
        let mut content = String::from("# Jane Doe\n");
        for i in 0..80 {
            content.push_str(&format!("- Bullet number {i} with a bit of supporting detail\n"));
        }
        let doc = build(&content, 10, PageSize::A4);
        assert!(doc.pages.len() > 1, "80 bullets cannot fit on one A4 page");
    }

    #[test]
    fn test_page_count_monotone_in_content_length() {
        let mut prev_pages = 0;
        for n in [5usize, 40, 80, 160] {
            let mut content = String::new();
            for i in 0..n {
                content.push_str(&format!("Paragraph {i} with some words in it\n"));
            }
            let doc = build(&content, 10, PageSize::A4);
            assert!(doc.pages.len() >= prev_pages.max(1));
            prev_pages = doc.pages.len();
        }
    }
}
