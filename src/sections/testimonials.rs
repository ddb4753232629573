use serde::Deserialize;

use crate::content::Field;
use crate::sections::load::LoadState;
use crate::sections::{or_default, SectionDocument, SectionKind, SectionUpdate};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsDocument {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "or_default")]
    pub testimonials_list: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Testimonial {
    #[serde(skip)]
    pub id: usize,
    #[serde(default, deserialize_with = "or_default")]
    pub quote: String,
    #[serde(default, deserialize_with = "or_default")]
    pub author: String,
    #[serde(default, deserialize_with = "or_default")]
    pub role: String,
    #[serde(default, deserialize_with = "or_default")]
    pub company: String,
}

impl Testimonial {
    /// `"Role, Company"`, omitting whichever part is empty.
    pub fn byline(&self) -> String {
        [self.role.as_str(), self.company.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl SectionDocument for TestimonialsDocument {
    const KIND: SectionKind = SectionKind::Testimonials;

    fn projection() -> Vec<Field> {
        vec![
            Field::value("title"),
            Field::value("description"),
            Field::array(
                "testimonialsList",
                vec![
                    Field::value("quote"),
                    Field::value("author"),
                    Field::value("role"),
                    Field::value("company"),
                ],
            ),
        ]
    }

    fn prepare(mut self) -> Self {
        for (index, testimonial) in self.testimonials_list.iter_mut().enumerate() {
            testimonial.id = index + 1;
        }
        self
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate {
        SectionUpdate::Testimonials(state)
    }
}
