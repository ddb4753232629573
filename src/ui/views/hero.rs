use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::sections::{clamp_percent, HeroDocument};
use crate::ui::theme::{ACCENT_PURPLE, ACCENT_TEAL, HEADER_TEXT};
use crate::ui::views::{level_bar, muted, title};

pub fn lines(doc: &HeroDocument) -> Vec<Line<'static>> {
    let mut out = vec![
        title(&doc.name),
        muted(&doc.title),
        Line::default(),
    ];

    for info in &doc.contact_info {
        let target = info
            .href
            .as_deref()
            .map(|href| format!("  <{href}>"))
            .unwrap_or_default();
        out.push(Line::from(vec![
            Span::styled(
                format!(" {} ", info.icon().glyph()),
                Style::default().fg(ACCENT_TEAL),
            ),
            Span::raw(info.title.clone()),
            Span::styled(target, Style::default().add_modifier(Modifier::DIM)),
        ]));
    }

    if !doc.tech_stack.is_empty() {
        out.push(Line::default());
        out.push(Line::from(Span::styled(
            "Tech Stack",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        let width = doc
            .tech_stack
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(0);
        for tech in &doc.tech_stack {
            out.push(Line::from(vec![
                Span::raw(format!(" {:<width$} ", tech.name)),
                Span::styled(level_bar(tech.level, 20), Style::default().fg(ACCENT_TEAL)),
                Span::raw(format!(" {}%", clamp_percent(tech.level))),
            ]));
        }
    }

    out.push(Line::from(vec![
        Span::styled(" ⤓ Download CV ", Style::default().fg(ACCENT_TEAL)),
        Span::styled(
            doc.cv_url().to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]));

    out.push(Line::default());
    out.push(Line::from(Span::styled(
        doc.headline.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    out.push(Line::from(Span::styled(
        doc.subheading.clone(),
        Style::default().fg(ACCENT_PURPLE),
    )));
    out.push(Line::from(doc.description.clone()));
    if !doc.cta_text.is_empty() {
        out.push(Line::from(vec![
            Span::styled(
                format!("[ {} ]", doc.cta_text),
                Style::default().fg(ACCENT_PURPLE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", doc.cta_link),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
    }

    if !doc.stats.is_empty() {
        out.push(Line::default());
        let spans: Vec<Span<'static>> = doc
            .stats
            .iter()
            .flat_map(|stat| {
                [
                    Span::styled(
                        format!("{} ", stat.value),
                        Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{} {}   ", stat.unit, stat.title)),
                ]
            })
            .collect();
        out.push(Line::from(spans));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionDocument;

    #[test]
    fn fallback_renders_name_first() {
        let doc = HeroDocument::fallback().unwrap();
        let lines = lines(&doc);
        assert_eq!(lines[0].to_string(), "Dave");
        assert!(lines.iter().any(|l| l.to_string().contains("/cv.pdf")));
    }

    #[test]
    fn stats_show_text_and_fractions() {
        let doc: HeroDocument = serde_json::from_value(serde_json::json!({
            "name": "Dave",
            "techStack": [{"name": "Rust", "level": 87.5}],
            "stats": [
                {"title": "Projects", "value": "5+", "unit": ""},
                {"title": "Experience", "value": 3, "unit": "Years"}
            ]
        }))
        .unwrap();
        let text: Vec<String> = lines(&doc).iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("87.5%")));
        assert!(text.iter().any(|l| l.contains("5+  Projects") && l.contains("3 Years Experience")));
    }
}
