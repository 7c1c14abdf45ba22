//! Page geometry and the vertical-cursor document builder.
//!
//! Rendering happens in two stages: the renderers drive a `DocumentBuilder`
//! that accumulates draw operations per page while tracking a downward-moving
//! y cursor, and `layout::pdf` serializes the finished `LayoutDocument` to
//! bytes. Keeping the draw-op model inspectable lets tests assert on layout
//! (page counts, drawn text, positions) without parsing PDF output.

use crate::layout::font_metrics::FontId;

// ────────────────────────────────────────────────────────────────────────────
// Geometry
// ────────────────────────────────────────────────────────────────────────────

/// Fixed page dimensions in PostScript points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub fn width(self) -> f32 {
        match self {
            PageSize::A4 => 595.28,
            PageSize::Letter => 612.0,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            PageSize::A4 => 841.89,
            PageSize::Letter => 792.0,
        }
    }
}

/// Margins and default line height for one document.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_side: f32,
    pub line_height: f32,
}

impl PageGeometry {
    /// Horizontal space available to body text.
    pub fn column_width(&self) -> f32 {
        self.size.width() - 2.0 * self.margin_side
    }

    /// y coordinate of the first baseline on a fresh page.
    pub fn top_y(&self) -> f32 {
        self.size.height() - self.margin_top
    }
}

/// RGB fill color, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

// ────────────────────────────────────────────────────────────────────────────
// Draw-op model
// ────────────────────────────────────────────────────────────────────────────

/// One positioned run of text.
#[derive(Debug, Clone)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontId,
    pub size: f32,
    pub color: Rgb,
}

/// One horizontal rule.
#[derive(Debug, Clone)]
pub struct RuleOp {
    pub x_start: f32,
    pub x_end: f32,
    pub y: f32,
    pub thickness: f32,
    pub color: Rgb,
}

/// All draw operations for one page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub texts: Vec<TextOp>,
    pub rules: Vec<RuleOp>,
}

/// The finished layout, ready for serialization.
#[derive(Debug, Clone)]
pub struct LayoutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl LayoutDocument {
    /// Concatenated text of every drawn run, in draw order. Test helper for
    /// asserting on document content without caring about positions.
    pub fn all_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            for op in &page.texts {
                out.push_str(&op.text);
                out.push('\n');
            }
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document builder
// ────────────────────────────────────────────────────────────────────────────

/// Vertical-cursor page builder.
///
/// `y` is the distance from the page bottom and only ever decreases within a
/// page. `ensure_space` appends a new page when a block of height `h` would
/// cross the bottom margin; callers invoke it once per wrapped block so a
/// multi-line bullet or paragraph is never split across pages (a block taller
/// than a full page still overflows past the margin, accepted).
pub struct DocumentBuilder {
    geometry: PageGeometry,
    pages: Vec<Page>,
    y: f32,
}

impl DocumentBuilder {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            y: geometry.top_y(),
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Appends a fresh page and resets the cursor below the top margin.
    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.geometry.top_y();
    }

    /// Breaks to a new page if drawing `h` points would cross the bottom
    /// margin. Call before drawing each block.
    pub fn ensure_space(&mut self, h: f32) {
        if self.y - h < self.geometry.margin_bottom {
            self.new_page();
        }
    }

    /// Moves the cursor down by `dy` points.
    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Draws text at the given x offset and the current baseline.
    pub fn text(&mut self, text: impl Into<String>, x: f32, font: FontId, size: f32, color: Rgb) {
        let op = TextOp {
            text: text.into(),
            x,
            y: self.y,
            font,
            size,
            color,
        };
        self.current_page().texts.push(op);
    }

    /// Draws a horizontal rule at the given y coordinate.
    pub fn rule(&mut self, x_start: f32, x_end: f32, y: f32, thickness: f32, color: Rgb) {
        self.current_page().rules.push(RuleOp {
            x_start,
            x_end,
            y,
            thickness,
            color,
        });
    }

    pub fn finish(self) -> LayoutDocument {
        LayoutDocument {
            geometry: self.geometry,
            pages: self.pages,
        }
    }

    fn current_page(&mut self) -> &mut Page {
        // pages is never empty: new() seeds one and new_page only appends.
        let idx = self.pages.len() - 1;
        &mut self.pages[idx]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_geometry() -> PageGeometry {
        PageGeometry {
            size: PageSize::Letter,
            margin_top: 54.0,
            margin_bottom: 54.0,
            margin_side: 54.0,
            line_height: 14.5,
        }
    }

    #[test]
    fn test_new_builder_starts_with_one_page() {
        let builder = DocumentBuilder::new(letter_geometry());
        assert_eq!(builder.page_count(), 1);
        assert_eq!(builder.y(), 792.0 - 54.0);
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(PageSize::A4.width(), 595.28);
        assert_eq!(PageSize::A4.height(), 841.89);
        assert_eq!(PageSize::Letter.width(), 612.0);
        assert_eq!(PageSize::Letter.height(), 792.0);
    }

    #[test]
    fn test_column_width() {
        let geo = letter_geometry();
        assert_eq!(geo.column_width(), 612.0 - 108.0);
    }

    #[test]
    fn test_ensure_space_no_break_when_room_remains() {
        let mut builder = DocumentBuilder::new(letter_geometry());
        builder.ensure_space(100.0);
        assert_eq!(builder.page_count(), 1);
    }

    #[test]
    fn test_ensure_space_breaks_at_bottom_margin() {
        let geo = letter_geometry();
        let mut builder = DocumentBuilder::new(geo);
        // Drop the cursor to just above the bottom margin.
        builder.advance(builder.y() - geo.margin_bottom - 10.0);
        builder.ensure_space(14.5);
        assert_eq!(builder.page_count(), 2, "14.5pt does not fit in 10pt of room");
        assert_eq!(builder.y(), geo.top_y(), "cursor resets on the new page");
    }

    #[test]
    fn test_ensure_space_exact_fit_does_not_break() {
        let geo = letter_geometry();
        let mut builder = DocumentBuilder::new(geo);
        builder.advance(builder.y() - geo.margin_bottom - 20.0);
        builder.ensure_space(20.0);
        assert_eq!(builder.page_count(), 1, "y - h == margin_bottom still fits");
    }

    #[test]
    fn test_text_lands_on_current_page() {
        let mut builder = DocumentBuilder::new(letter_geometry());
        builder.text("first", 54.0, FontId::Helvetica, 11.0, BLACK);
        builder.new_page();
        builder.text("second", 54.0, FontId::Helvetica, 11.0, BLACK);

        let doc = builder.finish();
        assert_eq!(doc.pages[0].texts.len(), 1);
        assert_eq!(doc.pages[0].texts[0].text, "first");
        assert_eq!(doc.pages[1].texts.len(), 1);
        assert_eq!(doc.pages[1].texts[0].text, "second");
    }

    #[test]
    fn test_text_records_current_baseline() {
        let mut builder = DocumentBuilder::new(letter_geometry());
        builder.advance(100.0);
        builder.text("hello", 60.0, FontId::TimesRoman, 11.0, BLACK);
        let doc = builder.finish();
        let op = &doc.pages[0].texts[0];
        assert_eq!(op.y, 792.0 - 54.0 - 100.0);
        assert_eq!(op.x, 60.0);
    }

    #[test]
    fn test_all_text_joins_pages() {
        let mut builder = DocumentBuilder::new(letter_geometry());
        builder.text("one", 54.0, FontId::Helvetica, 11.0, BLACK);
        builder.new_page();
        builder.text("two", 54.0, FontId::Helvetica, 11.0, BLACK);
        let doc = builder.finish();
        assert!(doc.all_text().contains("one"));
        assert!(doc.all_text().contains("two"));
    }
}
