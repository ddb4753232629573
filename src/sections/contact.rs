use serde::Deserialize;

use crate::content::Field;
use crate::sections::links::SocialLink;
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

/// Form endpoint baked into the fallback document.
pub const FALLBACK_FORM_ENDPOINT: &str = "https://formspree.io/f/mwpolkno";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub formspree_endpoint: Option<String>,
}

impl ContactDocument {
    /// Submission endpoint declared by the document, if non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        self.formspree_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

impl SectionDocument for ContactDocument {
    const KIND: SectionKind = SectionKind::Contact;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("title"),
            Field::value("description"),
            Field::array("socialLinks", SocialLink::projection()),
            Field::value("formspreeEndpoint"),
        ]
    }

    fn fallback() -> Option<Self> {
        Some(Self {
            title: "Get in Touch".into(),
            description: "Let’s collaborate to bring your ideas to life. \
                          Drop me a message or connect with me online!"
                .into(),
            social_links: vec![
                SocialLink::new(
                    1,
                    "Email",
                    "FaEnvelope",
                    "mailto:davidetalong@gmail.com",
                    "Email Dave",
                ),
                SocialLink::new(
                    2,
                    "Twitter",
                    "FaTwitter",
                    "https://twitter.com/dave",
                    "Visit Dave on Twitter",
                ),
                SocialLink::new(
                    3,
                    "GitHub",
                    "FaGithub",
                    "https://github.com/dave",
                    "Visit Dave on GitHub",
                ),
                SocialLink::new(
                    4,
                    "LinkedIn",
                    "FaLinkedin",
                    "https://linkedin.com/in/dave",
                    "Visit Dave on LinkedIn",
                ),
            ],
            formspree_endpoint: Some(FALLBACK_FORM_ENDPOINT.into()),
        })
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Contact(state)
    }
}
