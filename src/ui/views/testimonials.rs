use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::sections::TestimonialsDocument;
use crate::ui::theme::{ACCENT_PURPLE, HEADER_TEXT};
use crate::ui::views::{muted, title};

pub fn lines(doc: &TestimonialsDocument) -> Vec<Line<'static>> {
    let mut out = vec![title(&doc.title), muted(&doc.description), Line::default()];

    for testimonial in &doc.testimonials_list {
        out.push(Line::from(Span::styled(
            format!("“{}”", testimonial.quote),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )));
        let mut byline = vec![Span::styled(
            format!("  — {}", testimonial.author),
            Style::default().fg(ACCENT_PURPLE),
        )];
        let role = testimonial.byline();
        if !role.is_empty() {
            byline.push(Span::styled(
                format!(", {role}"),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        out.push(Line::from(byline));
        out.push(Line::default());
    }

    out
}
