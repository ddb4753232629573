use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::sections::SectionKind;
use crate::ui::theme::{ACCENT_TEAL, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Brand label plus the section menu.
pub struct Header<'a> {
    brand: &'a str,
    active: SectionKind,
}

impl<'a> Header<'a> {
    pub fn new(brand: &'a str, active: SectionKind) -> Self {
        Self { brand, active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.brand.to_string(),
                Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │ ", separator_style),
        ];
        for (idx, kind) in SectionKind::NAV.iter().enumerate() {
            let style = if *kind == self.active {
                Style::default()
                    .fg(ACCENT_TEAL)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} {} ", idx + 1, kind.label()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
