use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::sections::FooterDocument;
use crate::ui::theme::{ACCENT_TEAL, HEADER_SEPARATOR, MUTED_TEXT};

pub fn lines(doc: &FooterDocument, copyright: &str) -> Vec<Line<'static>> {
    let separator = Style::default().fg(HEADER_SEPARATOR);
    let mut spans = Vec::new();

    for link in &doc.social_links {
        spans.push(Span::styled(
            format!("{} {} ", link.icon().glyph(), link.name),
            Style::default().fg(ACCENT_TEAL),
        ));
    }
    if !doc.legal_links.is_empty() {
        if !spans.is_empty() {
            spans.push(Span::styled("│ ", separator));
        }
        for link in &doc.legal_links {
            spans.push(Span::styled(
                format!("{} ", link.name),
                Style::default().fg(MUTED_TEXT),
            ));
        }
    }
    if !spans.is_empty() {
        spans.push(Span::styled("│ ", separator));
    }
    spans.push(Span::styled(
        copyright.to_string(),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    ));

    vec![Line::from(spans)]
}
