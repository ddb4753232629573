use serde::Deserialize;

use crate::content::{Field, ImageRef, ImageUrlBuilder};
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

pub const PREVIEW_SIZE: (u32, u32) = (600, 400);

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub projects_list: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Project {
    /// Position in the list, 1-based. Assigned after decode.
    #[serde(skip)]
    pub id: usize,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub image: ImageRef,
    #[serde(default, deserialize_with = "or_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub link: String,
}

impl Project {
    pub fn new(title: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn preview_url(&self, images: &ImageUrlBuilder) -> Option<String> {
        images.url(&self.image, PREVIEW_SIZE.0, PREVIEW_SIZE.1)
    }
}

impl SectionDocument for ProjectsDocument {
    const KIND: SectionKind = SectionKind::Projects;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("title"),
            Field::value("description"),
            Field::array(
                "projectsList",
                vec![
                    Field::value("title"),
                    Field::value("description"),
                    Field::value("image"),
                    Field::value("tags"),
                    Field::value("link"),
                ],
            ),
        ]
    }

    fn prepare(mut self) -> Self {
        for (index, project) in self.projects_list.iter_mut().enumerate() {
            project.id = index + 1;
        }
        self
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Projects(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prepare_assigns_one_based_ids() {
        let doc: ProjectsDocument = serde_json::from_value(json!({
            "title": "Work",
            "projectsList": [
                {"title": "A", "tags": ["web"]},
                {"title": "B", "tags": null}
            ]
        }))
        .unwrap();
        let doc = doc.prepare();
        let ids: Vec<usize> = doc.projects_list.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(doc.projects_list[1].tags.is_empty());
    }

    #[test]
    fn preview_uses_direct_url() {
        let project: Project = serde_json::from_value(json!({
            "title": "A",
            "image": {"asset": {"url": "https://cdn.example.com/a.png"}}
        }))
        .unwrap();
        let images = ImageUrlBuilder::new("https://cdn.sanity.io", "p", "d");
        assert_eq!(
            project.preview_url(&images).as_deref(),
            Some("https://cdn.example.com/a.png?w=600&h=400")
        );
    }
}
