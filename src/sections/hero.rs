use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::content::Field;
use crate::sections::icons::Icon;
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

/// CV location used when the document has no uploaded file.
pub const DEFAULT_CV_URL: &str = "/cv.pdf";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub contact_info: Vec<ContactInfo>,
    #[serde(default, deserialize_with = "or_default")]
    pub tech_stack: Vec<TechSkill>,
    #[serde(default, deserialize_with = "or_default")]
    pub cv_file: Option<CvFile>,
    #[serde(default, deserialize_with = "or_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "or_default")]
    pub subheading: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub cta_text: String,
    #[serde(default, deserialize_with = "or_default")]
    pub cta_link: String,
    #[serde(default, deserialize_with = "or_default")]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl ContactInfo {
    pub fn icon(&self) -> Icon {
        Icon::for_contact_href(self.href.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TechSkill {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
    /// Percentage, as stored.
    #[serde(default, deserialize_with = "or_default")]
    pub level: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CvFile {
    #[serde(default)]
    pub asset: Option<CvAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CvAsset {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Stat {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub value: StatValue,
    #[serde(default, deserialize_with = "or_default")]
    pub unit: String,
}

/// A stat figure. Editors enter numbers as well as text like `"5+"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Number(0.0)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(text) => f.write_str(text),
            StatValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl HeroDocument {
    /// Uploaded CV URL, or [`DEFAULT_CV_URL`].
    pub fn cv_url(&self) -> &str {
        self.cv_file
            .as_ref()
            .and_then(|f| f.asset.as_ref())
            .and_then(|a| a.url.as_deref())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CV_URL)
    }
}

impl SectionDocument for HeroDocument {
    const KIND: SectionKind = SectionKind::Hero;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("name"),
            Field::value("title"),
            Field::array("contactInfo", vec![Field::value("title"), Field::value("href")]),
            Field::array("techStack", vec![Field::value("name"), Field::value("level")]),
            Field::object("cvFile", vec![Field::deref("asset", vec![Field::value("url")])]),
            Field::value("headline"),
            Field::value("subheading"),
            Field::value("description"),
            Field::value("ctaText"),
            Field::value("ctaLink"),
            Field::array(
                "stats",
                vec![Field::value("title"), Field::value("value"), Field::value("unit")],
            ),
        ]
    }

    fn fallback() -> Option<Self> {
        let contact = |title: &str, href: Option<&str>| ContactInfo {
            title: title.to_string(),
            href: href.map(str::to_string),
        };
        let skill = |name: &str, level: f64| TechSkill {
            name: name.to_string(),
            level,
        };
        let stat = |title: &str, value: f64| Stat {
            title: title.to_string(),
            value: value.into(),
            unit: "Years".to_string(),
        };

        Some(Self {
            name: "Dave".into(),
            title: "Senior Frontend Developer".into(),
            contact_info: vec![
                contact(
                    "davidetalong00@gmail.com",
                    Some("mailto:davidetalong00@gmail.com"),
                ),
                contact("Nigeria", None),
                contact("www.davelong.com", Some("https://www.davelong.com")),
            ],
            tech_stack: vec![
                skill("HTML", 90.0),
                skill("CSS", 85.0),
                skill("JavaScript", 80.0),
                skill("React", 88.0),
                skill("Solidity", 70.0),
            ],
            cv_file: Some(CvFile {
                asset: Some(CvAsset {
                    url: Some(DEFAULT_CV_URL.into()),
                }),
            }),
            headline: "Crafting Dynamic Web Experiences".into(),
            subheading: "Hey, I'm Dave".into(),
            description: "I transform ideas into pixel-perfect, performant interfaces. \
                          Let's build something unforgettable together!"
                .into(),
            cta_text: "Start a Project".into(),
            cta_link: "#contact".into(),
            stats: vec![
                stat("Languages", 3.0),
                stat("Tools", 4.0),
                stat("Experience", 3.0),
            ],
        })
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Hero(state)
    }
}
