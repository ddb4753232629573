use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::ImageUrlBuilder;
use crate::filter::{tags, ProjectFilter};
use crate::sections::ProjectsDocument;
use crate::ui::theme::{ACCENT_PURPLE, ACCENT_TEAL, ACTIVE_HIGHLIGHT, MUTED_TEXT};
use crate::ui::views::{muted, title};

pub fn lines(
    doc: &ProjectsDocument,
    filter: &ProjectFilter,
    images: &ImageUrlBuilder,
) -> Vec<Line<'static>> {
    let mut out = vec![title(&doc.title), muted(&doc.description), Line::default()];

    let chips: Vec<Span<'static>> = tags(&doc.projects_list)
        .into_iter()
        .flat_map(|tag| {
            let style = if tag == filter.selected() {
                Style::default()
                    .fg(ACCENT_TEAL)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            [Span::styled(format!(" {tag} "), style), Span::raw(" ")]
        })
        .collect();
    out.push(Line::from(chips));
    out.push(Line::default());

    let visible = filter.visible(&doc.projects_list);
    if visible.is_empty() {
        out.push(muted("No projects match this tag."));
    }
    for project in visible {
        out.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", project.id),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                project.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        out.push(Line::from(format!("    {}", project.description)));
        if !project.tags.is_empty() {
            out.push(Line::from(Span::styled(
                format!("    #{}", project.tags.join(" #")),
                Style::default().fg(ACCENT_PURPLE),
            )));
        }
        if let Some(url) = project.preview_url(images) {
            out.push(Line::from(Span::styled(
                format!("    ▣ {url}"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        if !project.link.is_empty() {
            out.push(Line::from(vec![
                Span::styled("    View Project → ", Style::default().fg(ACCENT_TEAL)),
                Span::styled(
                    project.link.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
        }
        out.push(Line::default());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Project, SectionDocument};

    fn doc() -> ProjectsDocument {
        ProjectsDocument {
            title: "Work".into(),
            description: String::new(),
            projects_list: vec![
                Project::new("Site", &["web", "api"]),
                Project::new("Tool", &["api", "cli"]),
            ],
        }
        .prepare()
    }

    #[test]
    fn filtered_list_shows_matching_titles() {
        let images = ImageUrlBuilder::new("https://cdn.sanity.io", "p", "d");
        let mut filter = ProjectFilter::new();
        filter.select_tag("cli");
        let text: Vec<String> = lines(&doc(), &filter, &images)
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Tool")));
        assert!(!text.iter().any(|l| l.contains("Site")));
        assert!(text.iter().any(|l| l.contains(" 2. Tool")));
    }
}
