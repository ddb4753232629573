use serde::Deserialize;

use crate::content::Field;
use crate::sections::icons::Icon;
use crate::sections::load::LoadState;
use crate::sections::{clamp_percent, or_default, SectionDocument, SectionKind, SectionUpdate};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub skills_list: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub icon: String,
    /// Proficiency percentage, as stored. May be fractional or out of range.
    #[serde(default, deserialize_with = "or_default")]
    pub level: f64,
}

impl Skill {
    pub fn icon(&self) -> Icon {
        Icon::from_name(&self.icon)
    }

    /// Level clamped to `0.0..=1.0` for gauges.
    pub fn ratio(&self) -> f64 {
        clamp_percent(self.level) / 100.0
    }
}

impl SectionDocument for SkillsDocument {
    const KIND: SectionKind = SectionKind::Skills;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("title"),
            Field::value("description"),
            Field::array(
                "skillsList",
                vec![Field::value("title"), Field::value("icon"), Field::value("level")],
            ),
        ]
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Skills(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        let skill = Skill {
            title: "Rust".into(),
            icon: "rust".into(),
            level: 140.0,
        };
        assert_eq!(skill.ratio(), 1.0);
        assert_eq!(skill.icon(), Icon::Unknown);

        let skill = Skill {
            level: -5.0,
            ..Skill::default()
        };
        assert_eq!(skill.ratio(), 0.0);
    }

    #[test]
    fn fractional_level_decodes() {
        let doc: SkillsDocument = serde_json::from_value(serde_json::json!({
            "title": "Skills",
            "skillsList": [
                {"title": "React", "icon": "react", "level": 87.5},
                {"title": "CSS", "icon": "css3", "level": 90},
                {"title": "Go", "icon": null, "level": null}
            ]
        }))
        .unwrap();
        assert_eq!(doc.skills_list[0].level, 87.5);
        assert_eq!(doc.skills_list[0].ratio(), 0.875);
        assert_eq!(doc.skills_list[1].level, 90.0);
        assert_eq!(doc.skills_list[2].level, 0.0);
    }
}
