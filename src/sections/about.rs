use serde::Deserialize;

use crate::content::{Field, ImageRef, ImageUrlBuilder};
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

pub const PORTRAIT_SIZE: (u32, u32) = (400, 400);

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub subtitle: String,
    /// Paragraphs, in order.
    #[serde(default, deserialize_with = "or_default")]
    pub description: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub cta: String,
    #[serde(default, deserialize_with = "or_default")]
    pub cta_link: String,
    #[serde(default, deserialize_with = "or_default")]
    pub image: ImageRef,
}

impl AboutDocument {
    pub fn portrait_url(&self, images: &ImageUrlBuilder) -> Option<String> {
        images.url(&self.image, PORTRAIT_SIZE.0, PORTRAIT_SIZE.1)
    }
}

impl SectionDocument for AboutDocument {
    const KIND: SectionKind = SectionKind::About;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("title"),
            Field::value("subtitle"),
            Field::value("description"),
            Field::value("cta"),
            Field::value("ctaLink"),
            Field::value("image"),
        ]
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::About(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn portrait_is_square() {
        let doc: AboutDocument = serde_json::from_value(json!({
            "title": "About me",
            "description": ["First.", "Second."],
            "image": {"_type": "image", "asset": {"_ref": "image-abc123-800x800-png", "_type": "reference"}}
        }))
        .unwrap();
        let images = ImageUrlBuilder::new("https://cdn.sanity.io", "proj", "production");
        assert_eq!(
            doc.portrait_url(&images).as_deref(),
            Some("https://cdn.sanity.io/images/proj/production/abc123-800x800.png?w=400&h=400")
        );
        assert_eq!(doc.description.len(), 2);
    }

    #[test]
    fn has_no_fallback() {
        assert!(AboutDocument::fallback().is_none());
    }
}
