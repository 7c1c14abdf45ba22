//! Serialization of a `LayoutDocument` to PDF bytes.
//!
//! Uses the standard-14 Type1 fonts, so nothing is embedded: each font
//! dictionary names a base font with WinAnsiEncoding and viewers supply the
//! glyphs. Text is encoded as WinAnsi bytes before being shown. Content
//! streams are written uncompressed.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use thiserror::Error;

use crate::layout::font_metrics::FontId;
use crate::layout::page::LayoutDocument;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("document has no pages")]
    EmptyDocument,
}

/// Maps text to WinAnsi-encoded bytes.
///
/// ASCII passes through; the typographic characters the renderers emit
/// (bullet, dashes, curly quotes) map to their WinAnsi code points; the rest
/// of Latin-1 maps byte-for-byte; anything else becomes '?'.
pub fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Serializes a laid-out document to PDF bytes.
pub fn serialize(doc: &LayoutDocument) -> Result<Vec<u8>, PdfError> {
    if doc.pages.is_empty() {
        return Err(PdfError::EmptyDocument);
    }

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    // Register all five standard fonts up front; the resource dictionary is
    // identical on every page.
    let font_refs: Vec<(FontId, Ref)> = FontId::ALL
        .iter()
        .map(|&font| {
            let font_ref = alloc();
            // WinAnsiEncoding must be declared or the non-ASCII bytes from
            // to_winansi_bytes (0x95 bullet and friends) resolve against the
            // fonts' built-in StandardEncoding instead.
            pdf.type1_font(font_ref)
                .base_font(Name(font.base_name().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            (font, font_ref)
        })
        .collect();

    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (page, &content_id) in doc.pages.iter().zip(content_ids.iter()) {
        let mut content = Content::new();

        for rule in &page.rules {
            content.save_state();
            content.set_line_width(rule.thickness);
            content.set_stroke_rgb(rule.color.r, rule.color.g, rule.color.b);
            content.move_to(rule.x_start, rule.y);
            content.line_to(rule.x_end, rule.y);
            content.stroke();
            content.restore_state();
        }

        for op in &page.texts {
            let bytes = to_winansi_bytes(&op.text);
            content
                .begin_text()
                .set_fill_rgb(op.color.r, op.color.g, op.color.b)
                .set_font(Name(op.font.resource_name().as_bytes()), op.size)
                .next_line(op.x, op.y)
                .show(Str(&bytes))
                .end_text();
        }

        pdf.stream(content_id, &content.finish());
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let width = doc.geometry.size.width();
    let height = doc.geometry.size.height();

    for (&page_id, &content_id) in page_ids.iter().zip(content_ids.iter()) {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height))
            .parent(pages_id)
            .contents(content_id);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (font, font_ref) in &font_refs {
            fonts.pair(Name(font.resource_name().as_bytes()), *font_ref);
        }
    }

    Ok(pdf.finish())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::{DocumentBuilder, PageGeometry, PageSize, BLACK};

    fn a4_geometry() -> PageGeometry {
        PageGeometry {
            size: PageSize::A4,
            margin_top: 50.0,
            margin_bottom: 50.0,
            margin_side: 50.0,
            line_height: 14.0,
        }
    }

    #[test]
    fn test_winansi_ascii_passthrough() {
        assert_eq!(to_winansi_bytes("Hello"), b"Hello".to_vec());
    }

    #[test]
    fn test_winansi_bullet_maps_to_0x95() {
        assert_eq!(to_winansi_bytes("\u{2022}"), vec![0x95]);
    }

    #[test]
    fn test_winansi_dashes_and_quotes() {
        assert_eq!(to_winansi_bytes("\u{2013}\u{2014}"), vec![0x96, 0x97]);
        assert_eq!(
            to_winansi_bytes("\u{2018}\u{2019}\u{201C}\u{201D}"),
            vec![0x91, 0x92, 0x93, 0x94]
        );
    }

    #[test]
    fn test_winansi_latin1_byte_for_byte() {
        assert_eq!(to_winansi_bytes("é"), vec![0xE9]);
    }

    #[test]
    fn test_winansi_unmappable_becomes_question_mark() {
        assert_eq!(to_winansi_bytes("日"), vec![b'?']);
    }

    #[test]
    fn test_serialize_minimal_document() {
        let builder = DocumentBuilder::new(a4_geometry());
        let bytes = serialize(&builder.finish()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"), "output must be a PDF");
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"), "output must be terminated");
    }

    #[test]
    fn test_serialize_with_text_and_rule() {
        let mut builder = DocumentBuilder::new(a4_geometry());
        builder.rule(50.0, 545.0, 800.0, 3.0, BLACK);
        builder.text(
            "John Smith",
            50.0,
            crate::layout::font_metrics::FontId::HelveticaBold,
            32.0,
            BLACK,
        );
        let bytes = serialize(&builder.finish()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        // Uncompressed content streams carry the shown text literally.
        assert!(
            bytes.windows(10).any(|w| w == b"John Smith"),
            "uncompressed stream should contain the drawn text"
        );
    }

    #[test]
    fn test_serialize_declares_winansi_encoding() {
        let mut builder = DocumentBuilder::new(a4_geometry());
        builder.text(
            "\u{2022} shipped it",
            50.0,
            crate::layout::font_metrics::FontId::Helvetica,
            10.0,
            BLACK,
        );
        let bytes = serialize(&builder.finish()).unwrap();
        assert!(
            bytes.windows(9).any(|w| w == b"/Encoding"),
            "font dictionaries must declare an encoding"
        );
        assert!(
            bytes.windows(15).any(|w| w == b"WinAnsiEncoding"),
            "shown bytes are WinAnsi, so the fonts must be registered with it"
        );
    }

    #[test]
    fn test_serialize_multi_page() {
        let mut builder = DocumentBuilder::new(a4_geometry());
        builder.new_page();
        builder.new_page();
        let bytes = serialize(&builder.finish()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let count = bytes.windows(5).filter(|w| w == b"/Page").count();
        assert!(count >= 3, "three page objects expected");
    }
}
