//! Section views. Each is a pure function from section state to lines.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod testimonials;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::sections::{clamp_percent, SectionDocument, SectionKind, SectionSlot, SectionView};
use crate::ui::app::App;
use crate::ui::theme::{ACCENT_TEAL, MUTED_TEXT};

/// Lines for `kind` as currently shown, animation applied.
///
/// A section that failed without a fallback renders no lines at all.
pub fn section_lines(app: &App, kind: SectionKind) -> Vec<Line<'static>> {
    let sections = app.sections();
    let lines = match kind {
        SectionKind::Hero => slot_lines(app, &sections.hero, hero::lines),
        SectionKind::About => slot_lines(app, &sections.about, |doc| {
            about::lines(doc, app.images())
        }),
        SectionKind::Skills => slot_lines(app, &sections.skills, skills::lines),
        SectionKind::Projects => slot_lines(app, &sections.projects, |doc| {
            projects::lines(doc, app.filter(), app.images())
        }),
        SectionKind::Testimonials => {
            slot_lines(app, &sections.testimonials, testimonials::lines)
        }
        SectionKind::Contact => slot_lines(app, &sections.contact, |doc| {
            contact::lines(doc, app.contact(), app.editing_field())
        }),
        SectionKind::Footer => slot_lines(app, &sections.footer, |doc| {
            footer::lines(doc, &app.display().copyright)
        }),
    };

    let shown = app.revealed_lines(kind, lines.len());
    lines.into_iter().take(shown).collect()
}

fn slot_lines<D, F>(app: &App, slot: &SectionSlot<D>, render: F) -> Vec<Line<'static>>
where
    D: SectionDocument,
    F: FnOnce(&D) -> Vec<Line<'static>>,
{
    match slot.view() {
        SectionView::Loading => vec![loading_line(app.spinner(), D::KIND)],
        SectionView::Ready { document, .. } => render(document),
        SectionView::Hidden => Vec::new(),
    }
}

fn loading_line(spinner: char, kind: SectionKind) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{spinner} "), Style::default().fg(ACCENT_TEAL)),
        Span::styled(
            format!("Loading {}…", kind.label().to_lowercase()),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

pub(crate) fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT_TEAL)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(MUTED_TEXT)))
}

/// `[████░░░░]` style bar for a 0..=100 level.
pub(crate) fn level_bar(level: f64, width: usize) -> String {
    let filled = ((clamp_percent(level) * width as f64) / 100.0).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bar_rounds() {
        assert_eq!(level_bar(0.0, 4), "░░░░");
        assert_eq!(level_bar(50.0, 4), "██░░");
        assert_eq!(level_bar(250.0, 4), "████");
        assert_eq!(level_bar(-10.0, 4), "░░░░");
    }

    #[test]
    fn level_bar_takes_fractions() {
        assert_eq!(level_bar(87.5, 8), "███████░");
        assert_eq!(level_bar(f64::NAN, 2), "░░");
    }
}
