use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::ImageUrlBuilder;
use crate::sections::AboutDocument;
use crate::ui::theme::{ACCENT_PURPLE, ACCENT_TEAL};
use crate::ui::views::{muted, title};

pub fn lines(doc: &AboutDocument, images: &ImageUrlBuilder) -> Vec<Line<'static>> {
    let mut out = vec![title(&doc.title), muted(&doc.subtitle), Line::default()];

    for paragraph in &doc.description {
        out.push(Line::from(strip_markup(paragraph)));
        out.push(Line::default());
    }

    if !doc.cta.is_empty() {
        out.push(Line::from(vec![
            Span::styled(
                format!("[ {} ]", doc.cta),
                Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", doc.cta_link),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
    }

    if let Some(url) = doc.portrait_url(images) {
        out.push(Line::from(vec![
            Span::styled(" ▣ Portrait ", Style::default().fg(ACCENT_TEAL)),
            Span::styled(url, Style::default().add_modifier(Modifier::DIM)),
        ]));
    }

    out
}

/// Paragraphs may carry inline HTML; drop the tags.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
