use serde::Deserialize;

use crate::content::Field;
use crate::sections::links::{LegalLink, SocialLink};
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(default, deserialize_with = "or_default")]
    pub legal_links: Vec<LegalLink>,
}

impl SectionDocument for FooterDocument {
    const KIND: SectionKind = SectionKind::Footer;

    fn projection() -> Vec<Field> {
        vec![
            Field::array("socialLinks", SocialLink::projection_with_id()),
            Field::array("legalLinks", LegalLink::projection()),
        ]
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Footer(state)
    }
}
