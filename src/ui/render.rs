use std::time::SystemTime;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::sections::{SectionKind, SectionStatus};
use crate::ui::app::{App, PopupKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT_PURPLE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use crate::ui::views::section_lines;

/// Diagnostics shown in the status popup, newest last.
const POPUP_DIAGNOSTICS: usize = 8;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.display().brand, app.active_section());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let page = Paragraph::new(section_lines(app, app.active_section()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(page, body);

    let footer_widget = Footer::new(section_lines(app, SectionKind::Footer));
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(kind) = app.popup_kind() {
        let (title, lines) = match kind {
            PopupKind::Status => ("Status", status_lines(app)),
        };

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popup_width = content_width.saturating_add(4).max(40);
        let popup_height = lines.len().saturating_add(2) as u16;
        let area = centered_rect_by_size(body, popup_width, popup_height);

        frame.render_widget(Clear, area);
        let popup = Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT_PURPLE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(lines).block(popup);
        frame.render_widget(widget, area);
    }
}

fn status_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (kind, status) in app.sections().summary() {
        let color = match status {
            SectionStatus::Loading => MUTED_TEXT,
            SectionStatus::Loaded => STATUS_OK,
            SectionStatus::Fallback(_) => STATUS_WARN,
            SectionStatus::Empty(_) => STATUS_ERROR,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<13}", kind.doc_type()), Style::default().fg(HEADER_TEXT)),
            Span::styled(status.label(), Style::default().fg(color)),
        ]));
    }

    let entries = app.diagnostics().snapshot();
    lines.push(Line::from(""));
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No problems recorded.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let now = SystemTime::now();
        let skip = entries.len().saturating_sub(POPUP_DIAGNOSTICS);
        for entry in entries.into_iter().skip(skip) {
            let age = now
                .duration_since(entry.at)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            lines.push(Line::from(vec![
                Span::styled(format!("{age:>4}s ago "), Style::default().fg(MUTED_TEXT)),
                Span::styled(format!("{}: ", entry.source), Style::default().fg(HEADER_TEXT)),
                Span::styled(entry.message, Style::default().fg(STATUS_ERROR)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Esc/Ctrl+S: Close"));
    lines
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::config::Config;
    use crate::diagnostics::DiagnosticLog;
    use crate::sections::{HeroDocument, LoadState, SectionUpdate, SkillsDocument};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        let mut config = Config::default();
        config.display.reduced_motion = true;
        App::new(&config, DiagnosticLog::new())
    }

    #[test]
    fn draws_menu_and_hero_fallback() {
        let mut app = app();
        app.apply_section_update(SectionUpdate::Hero(LoadState::<HeroDocument>::Failed(
            "No hero data found".into(),
        )));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Home"));
        assert!(text.contains("Contact"));
        assert!(text.contains("Hey, I'm Dave"));
    }

    #[test]
    fn status_popup_lists_sections_and_problems() {
        let mut app = app();
        app.apply_section_update(SectionUpdate::Skills(LoadState::<SkillsDocument>::Failed(
            "No skills data found".into(),
        )));
        app.toggle_popup(PopupKind::Status);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Status"));
        assert!(text.contains("testimonials"));
        assert!(text.contains("No skills data found"));
    }
}
