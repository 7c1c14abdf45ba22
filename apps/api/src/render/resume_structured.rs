//! Structured-data resume renderer.
//!
//! Helvetica on A4 with a blue accent: 3pt top rule, blue job title and
//! section headers. Sections appear in a fixed order and any section whose
//! backing data is empty is omitted entirely, header included.

use crate::layout::font_metrics::{get_metrics, FontId};
use crate::layout::page::{DocumentBuilder, LayoutDocument, PageGeometry, PageSize, Rgb, BLACK};
use crate::layout::wrap::wrap_text;
use crate::models::profile::UserProfile;
use crate::models::resume::StructuredResume;
use crate::render::bullets::sentence_bullets;

const MARGIN: f32 = 50.0;
const MARGIN_TOP: f32 = 60.0;
const LINE_HEIGHT: f32 = 14.0;
const BODY_SIZE: f32 = 10.0;

const PRIMARY: Rgb = Rgb {
    r: 0.16,
    g: 0.35,
    b: 0.61,
};

fn geometry() -> PageGeometry {
    PageGeometry {
        size: PageSize::A4,
        margin_top: MARGIN_TOP,
        margin_bottom: MARGIN,
        margin_side: MARGIN,
        line_height: LINE_HEIGHT,
    }
}

fn section_header(doc: &mut DocumentBuilder, title: &str) {
    doc.text(title, MARGIN, FontId::HelveticaBold, 14.0, PRIMARY);
    doc.advance(20.0);
}

fn wrapped_paragraph(doc: &mut DocumentBuilder, text: &str, font: FontId, x_offset: f32) {
    let column = doc.geometry().column_width() - x_offset;
    let lines = wrap_text(text, font, BODY_SIZE, column);
    doc.ensure_space(lines.len() as f32 * LINE_HEIGHT);
    for line in lines {
        doc.text(line, MARGIN + x_offset, font, BODY_SIZE, BLACK);
        doc.advance(LINE_HEIGHT);
    }
}

/// Groups skills by category, preserving the first-seen order of categories
/// and the original order of skills within each category. A missing category
/// falls into "General".
fn group_skills(resume: &StructuredResume) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for skill in &resume.skills {
        let category = if skill.category.is_empty() {
            "General".to_string()
        } else {
            skill.category.clone()
        };
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, names)) => names.push(skill.name.clone()),
            None => groups.push((category, vec![skill.name.clone()])),
        }
    }
    groups
}

/// Lays out a resume from structured profile and resume data.
pub fn build(profile: &UserProfile, resume: &StructuredResume) -> LayoutDocument {
    let geo = geometry();
    let mut doc = DocumentBuilder::new(geo);
    let width = geo.size.width();
    let column = geo.column_width();

    // Blue accent rule above the name.
    doc.rule(MARGIN, width - MARGIN, doc.y() + 10.0, 3.0, PRIMARY);
    doc.advance(24.0);

    if let Some(name) = profile.full_name.as_deref().filter(|n| !n.is_empty()) {
        doc.text(name, MARGIN, FontId::HelveticaBold, 32.0, BLACK);
    }
    doc.advance(20.0);

    // Job title taken from the most recent experience entry.
    if let Some(first) = resume.experience.first() {
        doc.text(first.role.clone(), MARGIN, FontId::Helvetica, 18.0, PRIMARY);
        doc.advance(20.0);
    }

    let contact_lines = [
        profile.phone.as_deref(),
        profile.email.as_deref(),
        profile.portfolio.as_deref(),
        profile.linkedin.as_deref(),
    ];
    for line in contact_lines.into_iter().flatten().filter(|l| !l.is_empty()) {
        doc.text(line, MARGIN, FontId::Helvetica, BODY_SIZE, BLACK);
        doc.advance(LINE_HEIGHT);
    }
    doc.advance(20.0);

    if !resume.summary.is_empty() {
        section_header(&mut doc, "PROFESSIONAL SUMMARY");
        wrapped_paragraph(&mut doc, &resume.summary, FontId::Helvetica, 0.0);
        doc.advance(15.0);
    }

    if !resume.skills.is_empty() {
        section_header(&mut doc, "SKILLS");
        for (category, names) in group_skills(resume) {
            let label = format!("{category}:");
            let label_width = get_metrics(FontId::HelveticaBold).text_width(&label, BODY_SIZE);
            let joined = names.join(", ");
            let lines = wrap_text(&joined, FontId::Helvetica, BODY_SIZE, column - label_width);

            doc.ensure_space(lines.len().max(1) as f32 * LINE_HEIGHT);
            doc.text(label, MARGIN, FontId::HelveticaBold, BODY_SIZE, BLACK);
            for line in lines {
                doc.text(
                    format!(" {line}"),
                    MARGIN + label_width,
                    FontId::Helvetica,
                    BODY_SIZE,
                    BLACK,
                );
                doc.advance(LINE_HEIGHT);
            }
            doc.advance(5.0);
        }
        doc.advance(15.0);
    }

    if !resume.experience.is_empty() {
        section_header(&mut doc, "PROFESSIONAL EXPERIENCE");
        for exp in &resume.experience {
            doc.ensure_space(100.0);

            let location = profile.location.as_deref().unwrap_or_default();
            let heading = format!(
                "{}, {} ({} - {})",
                exp.company, location, exp.start_date, exp.end_date
            );
            doc.text(heading, MARGIN, FontId::HelveticaBold, 11.0, BLACK);
            doc.advance(18.0);

            doc.text(
                exp.role.to_uppercase(),
                MARGIN,
                FontId::Helvetica,
                BODY_SIZE,
                BLACK,
            );
            doc.advance(16.0);

            for point in sentence_bullets(&exp.description) {
                let lines = wrap_text(&point, FontId::Helvetica, BODY_SIZE, column - 20.0);
                doc.ensure_space(lines.len() as f32 * LINE_HEIGHT);

                doc.text("\u{2022}", MARGIN + 10.0, FontId::Helvetica, 8.0, BLACK);
                for line in lines {
                    doc.text(line, MARGIN + 25.0, FontId::Helvetica, BODY_SIZE, BLACK);
                    doc.advance(LINE_HEIGHT);
                }
            }

            doc.advance(10.0);
        }
        doc.advance(15.0);
    }

    if !resume.education.is_empty() {
        doc.ensure_space(150.0);
        section_header(&mut doc, "EDUCATION");
        for edu in &resume.education {
            doc.text(
                format!("{} ({})", edu.school, edu.year),
                MARGIN,
                FontId::HelveticaBold,
                11.0,
                BLACK,
            );
            doc.advance(16.0);

            doc.text(
                format!("- {}", edu.degree),
                MARGIN + 10.0,
                FontId::Helvetica,
                BODY_SIZE,
                BLACK,
            );
            doc.advance(20.0);
        }
        doc.advance(15.0);
    }

    if !resume.achievements.is_empty() {
        doc.ensure_space(100.0);
        section_header(&mut doc, "CERTIFICATIONS / ACHIEVEMENTS");
        for achievement in &resume.achievements {
            doc.text(
                format!("\u{2022}  {}", achievement.title),
                MARGIN,
                FontId::Helvetica,
                BODY_SIZE,
                BLACK,
            );
            doc.advance(LINE_HEIGHT);
        }
    }

    doc.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
