//! Tag filter over the projects list.

use crate::sections::Project;

/// Pseudo-tag that matches every project.
pub const ALL_TAG: &str = "All";

/// `"All"` followed by every distinct tag, in first-seen order.
pub fn tags(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_TAG.to_string()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !out.iter().any(|seen| seen == tag) {
            out.push(tag.clone());
        }
    }
    out
}

/// Projects carrying `tag`, in their original order. [`ALL_TAG`] keeps all.
pub fn visible<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    if tag == ALL_TAG {
        projects.iter().collect()
    } else {
        projects.iter().filter(|p| p.has_tag(tag)).collect()
    }
}

/// Selected tag for the projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL_TAG.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Replace the selection. No membership check is made.
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selected = tag.into();
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        visible(projects, &self.selected)
    }

    /// Move to the tag after the current one, wrapping around.
    pub fn next(&mut self, projects: &[Project]) {
        self.step(projects, 1);
    }

    pub fn previous(&mut self, projects: &[Project]) {
        self.step(projects, -1);
    }

    fn step(&mut self, projects: &[Project], delta: isize) {
        let all = tags(projects);
        let len = all.len() as isize;
        let current = all
            .iter()
            .position(|t| *t == self.selected)
            .map(|i| i as isize)
            .unwrap_or(0);
        let index = (current + delta).rem_euclid(len) as usize;
        self.selected = all[index].clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tags_keep_first_position() {
        let projects = vec![
            Project::new("a", &["api", "web"]),
            Project::new("b", &["web", "api", "api"]),
        ];
        assert_eq!(tags(&projects), vec!["All", "api", "web"]);
    }

    #[test]
    fn no_projects_still_offers_all() {
        assert_eq!(tags(&[]), vec![ALL_TAG]);
        assert!(visible(&[], "web").is_empty());
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let projects = vec![Project::new("a", &["web"]), Project::new("b", &["cli"])];
        let mut filter = ProjectFilter::new();
        filter.previous(&projects);
        assert_eq!(filter.selected(), "cli");
        filter.next(&projects);
        assert_eq!(filter.selected(), ALL_TAG);
        filter.next(&projects);
        assert_eq!(filter.selected(), "web");
    }

    #[test]
    fn unknown_selection_cycles_from_start() {
        let projects = vec![Project::new("a", &["web"])];
        let mut filter = ProjectFilter::new();
        filter.select_tag("gone");
        assert!(filter.visible(&projects).is_empty());
        filter.next(&projects);
        assert_eq!(filter.selected(), "web");
    }
}
