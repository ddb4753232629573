use serde::Deserialize;

use crate::content::Field;
use crate::sections::icons::Icon;
use crate::sections::or_default;

/// Outbound profile link shown in the contact and footer sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "or_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "or_default")]
    pub aria_label: String,
}

impl SocialLink {
    pub fn new(id: u32, name: &str, icon: &str, link: &str, aria_label: &str) -> Self {
        Self {
            id: Some(id),
            name: name.to_string(),
            link: link.to_string(),
            icon: icon.to_string(),
            aria_label: aria_label.to_string(),
        }
    }

    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }

    /// Projection used by the contact document.
    pub(crate) fn projection() -> Vec<Field> {
        vec![
            Field::value("name"),
            Field::value("link"),
            Field::value("icon"),
            Field::value("ariaLabel"),
        ]
    }

    /// Projection used by the footer document, which also carries ids.
    pub(crate) fn projection_with_id() -> Vec<Field> {
        vec![
            Field::value("id"),
            Field::value("name"),
            Field::value("icon"),
            Field::value("link"),
            Field::value("ariaLabel"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalLink {
    #[serde(default, deserialize_with = "or_default")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "or_default")]
    pub aria_label: String,
}

impl LegalLink {
    pub(crate) fn projection() -> Vec<Field> {
        vec![
            Field::value("id"),
            Field::value("name"),
            Field::value("link"),
            Field::value("ariaLabel"),
        ]
    }
}
