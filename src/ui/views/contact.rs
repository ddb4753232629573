use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::contact::{ContactForm, FormField, SubmissionStatus};
use crate::sections::ContactDocument;
use crate::ui::theme::{ACCENT_TEAL, ACTIVE_HIGHLIGHT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::views::{muted, title};

pub fn lines(
    doc: &ContactDocument,
    contact: &ContactForm,
    editing: Option<FormField>,
) -> Vec<Line<'static>> {
    let mut out = vec![title(&doc.title), muted(&doc.description), Line::default()];

    for field in FormField::ALL {
        let focused = editing == Some(field);
        let value = contact.form().get(field);
        let mut value_style = Style::default();
        if focused {
            value_style = value_style.bg(ACTIVE_HIGHLIGHT);
        }
        let cursor = if focused { "▏" } else { "" };
        out.push(Line::from(vec![
            Span::styled(
                format!("{:>8}: ", field.label()),
                Style::default().fg(if focused { ACCENT_TEAL } else { MUTED_TEXT }),
            ),
            Span::styled(format!("{value}{cursor}"), value_style),
        ]));
        let error = contact.errors().get(field);
        if !error.is_empty() {
            out.push(Line::from(Span::styled(
                format!("          {error}"),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    out.push(Line::default());
    match contact.status() {
        SubmissionStatus::Succeeded(message) => out.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_OK),
        ))),
        SubmissionStatus::Failed(message) => out.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
    }

    let (label, style) = if contact.status().is_submitting() {
        (
            "[ Sending... ]",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )
    } else {
        (
            "[ Send Message ]",
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        )
    };
    let hint = if editing.is_some() {
        "  Enter: send  Tab: next field  Esc: done"
    } else {
        "  Enter: edit"
    };
    out.push(Line::from(vec![
        Span::styled(label, style),
        Span::styled(hint, Style::default().fg(MUTED_TEXT)),
    ]));

    if !doc.social_links.is_empty() {
        out.push(Line::default());
        out.push(Line::from(Span::styled(
            "Connect with Me",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for link in &doc.social_links {
            out.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", link.icon().glyph()),
                    Style::default().fg(ACCENT_TEAL),
                ),
                Span::raw(format!("{:<10}", link.name)),
                Span::styled(
                    link.link.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionDocument;

    #[test]
    fn shows_field_errors_and_sending_state() {
        let doc = ContactDocument::fallback().unwrap();
        let mut contact = ContactForm::new();
        contact.validate();
        let text: Vec<String> = lines(&doc, &contact, None)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Name is required")));
        assert!(text.iter().any(|l| l.contains("Send Message")));
        assert!(text.iter().any(|l| l.contains("twitter.com")));

        contact.on_field_change(FormField::Name, "Ada");
        contact.on_field_change(FormField::Email, "ada@example.com");
        contact.on_field_change(FormField::Message, "Hi");
        assert!(contact.begin_submit().is_some());
        let text: Vec<String> = lines(&doc, &contact, None)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Sending...")));
    }
}
