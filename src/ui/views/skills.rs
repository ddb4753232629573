use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::sections::{clamp_percent, SkillsDocument};
use crate::ui::theme::ACCENT_TEAL;
use crate::ui::views::{level_bar, muted, title};

pub fn lines(doc: &SkillsDocument) -> Vec<Line<'static>> {
    let mut out = vec![title(&doc.title), muted(&doc.description), Line::default()];

    let width = doc
        .skills_list
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(0);
    for skill in &doc.skills_list {
        out.push(Line::from(vec![
            Span::styled(
                format!(" {:>2} ", skill.icon().glyph()),
                Style::default().fg(ACCENT_TEAL),
            ),
            Span::styled(
                format!("{:<width$} ", skill.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(level_bar(skill.level, 24), Style::default().fg(ACCENT_TEAL)),
            Span::raw(format!(" {}%", clamp_percent(skill.level))),
        ]));
    }

    out
}
