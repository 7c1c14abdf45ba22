//! Cover-letter renderer for markdown-like input.
//!
//! Helvetica throughout. The title is centered bold and keeps its original
//! casing; deeper headings render left-aligned in the regular font, matching
//! business-letter convention. Blank lines advance a full line height and
//! paragraphs get a wider trailing gap than bullets. Pipe-delimited lines are
//! never treated as contact info here.

use crate::layout::blocks::{classify_document, ContentBlock};
use crate::layout::font_metrics::{get_metrics, FontId};
use crate::layout::page::{DocumentBuilder, LayoutDocument, PageGeometry, PageSize, BLACK};
use crate::layout::wrap::wrap_text;

const PAGE_MARGIN: f32 = 54.0;
const FONT_SIZE_NAME: f32 = 22.0;
const FONT_SIZE_SECTION_HEADER: f32 = 12.0;
const FONT_SIZE_BODY: f32 = 11.0;
const LINE_HEIGHT_BODY: f32 = 14.5;
const SPACING_AFTER_PARAGRAPH: f32 = 10.0;
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

/// Lays out a markdown cover letter.
pub fn build(content: &str, size: PageSize) -> LayoutDocument {
    let geo = geometry(size);
    let mut doc = DocumentBuilder::new(geo);
    let width = geo.size.width();
    let column = geo.column_width();

    // Threshold 0: pipe lines in a letter body are plain paragraphs.
    for block in classify_document(content, 0) {
        match block {
            ContentBlock::Blank => {
                doc.advance(LINE_HEIGHT_BODY);
            }

            ContentBlock::Title(text) => {
                doc.ensure_space(FONT_SIZE_NAME + 20.0);
                let text_width =
                    get_metrics(FontId::HelveticaBold).text_width(&text, FONT_SIZE_NAME);
                doc.text(
                    text,
                    (width - text_width) / 2.0,
                    FontId::HelveticaBold,
                    FONT_SIZE_NAME,
                    BLACK,
                );
                doc.advance(FONT_SIZE_NAME + 10.0);
            }

            ContentBlock::SectionHeader(text) => {
                doc.ensure_space(FONT_SIZE_SECTION_HEADER + 20.0);
                doc.text(
                    text,
                    PAGE_MARGIN,
                    FontId::Helvetica,
                    FONT_SIZE_SECTION_HEADER,
                    BLACK,
                );
                doc.advance(FONT_SIZE_SECTION_HEADER + 10.0);
            }

            ContentBlock::BulletItem(text) => {
                let lines = wrap_text(
                    &text,
                    FontId::Helvetica,
                    FONT_SIZE_BODY,
                    column - BULLET_TEXT_INDENT,
                );
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT_BODY + SPACING_AFTER_PARAGRAPH);

                doc.text(
                    "\u{2022}",
                    PAGE_MARGIN + BULLET_INDENT,
                    FontId::Helvetica,
                    FONT_SIZE_BODY,
                    BLACK,
                );
                for line in lines {
                    doc.text(
                        line,
                        PAGE_MARGIN + BULLET_TEXT_INDENT,
                        FontId::Helvetica,
                        FONT_SIZE_BODY,
                        BLACK,
                    );
                    doc.advance(LINE_HEIGHT_BODY);
                }
                doc.advance(4.0);
            }

            ContentBlock::ContactLine(text) | ContentBlock::Paragraph(text) => {
                let lines = wrap_text(&text, FontId::Helvetica, FONT_SIZE_BODY, column);
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT_BODY + SPACING_AFTER_PARAGRAPH);

                for line in lines {
                    doc.text(line, PAGE_MARGIN, FontId::Helvetica, FONT_SIZE_BODY, BLACK);
                    doc.advance(LINE_HEIGHT_BODY);
                }
                doc.advance(SPACING_AFTER_PARAGRAPH);
            }
        }
    }

    doc.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
