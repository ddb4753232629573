use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page footer: the footer document line (if any) above the key hints.
pub struct Footer {
    content: Vec<Line<'static>>,
}

impl Footer {
    pub fn new(content: Vec<Line<'static>>) -> Self {
        Self { content }
    }

    pub fn widget(self, area: Rect) -> Paragraph<'static> {
        let hints = " Tab/←→: Section │ 1-6: Jump │ [ ]: Tags │ Enter: Form │ Ctrl+S: Status │ q: Quit";
        let version = format!("v{} ", VERSION);

        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut lines = self.content;
        lines.truncate(1);
        if lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
