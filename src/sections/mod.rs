//! Portfolio sections and their content documents.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod links;
pub mod load;
pub mod projects;
pub mod skills;
pub mod testimonials;

use std::fmt::Debug;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tokio::runtime::Handle;

use crate::content::{ContentStore, Field, Query};
use crate::lifecycle::Teardown;

pub use about::AboutDocument;
pub use contact::ContactDocument;
pub use footer::FooterDocument;
pub use hero::HeroDocument;
pub use icons::Icon;
pub use links::{LegalLink, SocialLink};
pub use load::{
    load_document, spawn_loader, LoadIntent, LoadReducer, LoadState, SectionSlot, SectionView,
};
pub use projects::{Project, ProjectsDocument};
pub use skills::{Skill, SkillsDocument};
pub use testimonials::{Testimonial, TestimonialsDocument};

/// Section discriminator. Doubles as the document type queried for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    About,
    Skills,
    Projects,
    Testimonials,
    Contact,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Testimonials,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// Sections reachable from the navigation menu, in page order.
    pub const NAV: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Testimonials,
        SectionKind::Contact,
    ];

    pub fn doc_type(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::About => "About",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Testimonials => "Testimonials",
            SectionKind::Contact => "Contact",
            SectionKind::Footer => "Footer",
        }
    }
}

/// A document type backing one section.
pub trait SectionDocument:
    DeserializeOwned + Clone + PartialEq + Debug + Send + Sync + 'static
{
    const KIND: SectionKind;

    /// Fields requested from the content store.
    fn projection() -> Vec<Field>;

    /// Static content shown when the load fails.
    fn fallback() -> Option<Self> {
        None
    }

    /// Post-decode fixups (e.g. assigning list ids).
    fn prepare(self) -> Self {
        self
    }

    fn into_update(state: LoadState<Self>) -> SectionUpdate;

    fn query() -> Query {
        Query::first_of(Self::KIND.doc_type(), Self::projection())
    }
}

/// Settled load result for one section, delivered to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionUpdate {
    Hero(LoadState<HeroDocument>),
    About(LoadState<AboutDocument>),
    Skills(LoadState<SkillsDocument>),
    Projects(LoadState<ProjectsDocument>),
    Testimonials(LoadState<TestimonialsDocument>),
    Contact(LoadState<ContactDocument>),
    Footer(LoadState<FooterDocument>),
}

impl SectionUpdate {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionUpdate::Hero(_) => SectionKind::Hero,
            SectionUpdate::About(_) => SectionKind::About,
            SectionUpdate::Skills(_) => SectionKind::Skills,
            SectionUpdate::Projects(_) => SectionKind::Projects,
            SectionUpdate::Testimonials(_) => SectionKind::Testimonials,
            SectionUpdate::Contact(_) => SectionKind::Contact,
            SectionUpdate::Footer(_) => SectionKind::Footer,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SectionUpdate::Hero(s) => s.error(),
            SectionUpdate::About(s) => s.error(),
            SectionUpdate::Skills(s) => s.error(),
            SectionUpdate::Projects(s) => s.error(),
            SectionUpdate::Testimonials(s) => s.error(),
            SectionUpdate::Contact(s) => s.error(),
            SectionUpdate::Footer(s) => s.error(),
        }
    }
}

/// Coarse per-section status for summaries and the status popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStatus {
    Loading,
    Loaded,
    /// Failed, fallback content shown.
    Fallback(String),
    /// Failed, nothing shown.
    Empty(String),
}

impl SectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SectionStatus::Loading => "loading",
            SectionStatus::Loaded => "loaded",
            SectionStatus::Fallback(_) => "fallback",
            SectionStatus::Empty(_) => "empty",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SectionStatus::Fallback(reason) | SectionStatus::Empty(reason) => Some(reason),
            _ => None,
        }
    }
}

fn slot_status<D: SectionDocument>(slot: &SectionSlot<D>) -> SectionStatus {
    match slot.state() {
        LoadState::Pending => SectionStatus::Loading,
        LoadState::Loaded(_) => SectionStatus::Loaded,
        LoadState::Failed(message) if slot.fallback().is_some() => {
            SectionStatus::Fallback(message.clone())
        }
        LoadState::Failed(message) => SectionStatus::Empty(message.clone()),
    }
}

fn settle<D: SectionDocument>(slot: &mut SectionSlot<D>, state: LoadState<D>) {
    if let Some(intent) = LoadIntent::from_settled(state) {
        slot.dispatch(intent);
    }
}

/// Load slots for every section on the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sections {
    pub hero: SectionSlot<HeroDocument>,
    pub about: SectionSlot<AboutDocument>,
    pub skills: SectionSlot<SkillsDocument>,
    pub projects: SectionSlot<ProjectsDocument>,
    pub testimonials: SectionSlot<TestimonialsDocument>,
    pub contact: SectionSlot<ContactDocument>,
    pub footer: SectionSlot<FooterDocument>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every slot to `Pending` ahead of a mount.
    pub fn begin_all(&mut self) {
        self.hero.dispatch(LoadIntent::Begin);
        self.about.dispatch(LoadIntent::Begin);
        self.skills.dispatch(LoadIntent::Begin);
        self.projects.dispatch(LoadIntent::Begin);
        self.testimonials.dispatch(LoadIntent::Begin);
        self.contact.dispatch(LoadIntent::Begin);
        self.footer.dispatch(LoadIntent::Begin);
    }

    /// Spawn one loader per section. Results come back through `deliver`
    /// and must be fed to [`Sections::apply`] by the owner.
    pub fn mount<S, F>(&mut self, runtime: &Handle, store: Arc<S>, teardown: &Teardown, deliver: F)
    where
        S: ContentStore,
        F: Fn(SectionUpdate) + Clone + Send + 'static,
    {
        self.begin_all();
        tracing::info!(sections = SectionKind::ALL.len(), "Mounting sections");

        let handle = teardown.handle();
        spawn_loader::<HeroDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<AboutDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<SkillsDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<ProjectsDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<TestimonialsDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<ContactDocument, _, _>(runtime, store.clone(), handle.clone(), deliver.clone());
        spawn_loader::<FooterDocument, _, _>(runtime, store, handle, deliver);
    }

    /// Load every section concurrently and wait for all of them to settle.
    pub async fn load_all<S: ContentStore>(store: &S) -> Self {
        let (hero, about, skills, projects, testimonials, contact, footer) = tokio::join!(
            load_document::<HeroDocument, S>(store),
            load_document::<AboutDocument, S>(store),
            load_document::<SkillsDocument, S>(store),
            load_document::<ProjectsDocument, S>(store),
            load_document::<TestimonialsDocument, S>(store),
            load_document::<ContactDocument, S>(store),
            load_document::<FooterDocument, S>(store),
        );

        let mut sections = Self::new();
        for update in [
            SectionUpdate::Hero(hero),
            SectionUpdate::About(about),
            SectionUpdate::Skills(skills),
            SectionUpdate::Projects(projects),
            SectionUpdate::Testimonials(testimonials),
            SectionUpdate::Contact(contact),
            SectionUpdate::Footer(footer),
        ] {
            sections.apply(update);
        }
        sections
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Hero(state) => settle(&mut self.hero, state),
            SectionUpdate::About(state) => settle(&mut self.about, state),
            SectionUpdate::Skills(state) => settle(&mut self.skills, state),
            SectionUpdate::Projects(state) => settle(&mut self.projects, state),
            SectionUpdate::Testimonials(state) => settle(&mut self.testimonials, state),
            SectionUpdate::Contact(state) => settle(&mut self.contact, state),
            SectionUpdate::Footer(state) => settle(&mut self.footer, state),
        }
    }

    pub fn status(&self, kind: SectionKind) -> SectionStatus {
        match kind {
            SectionKind::Hero => slot_status(&self.hero),
            SectionKind::About => slot_status(&self.about),
            SectionKind::Skills => slot_status(&self.skills),
            SectionKind::Projects => slot_status(&self.projects),
            SectionKind::Testimonials => slot_status(&self.testimonials),
            SectionKind::Contact => slot_status(&self.contact),
            SectionKind::Footer => slot_status(&self.footer),
        }
    }

    pub fn summary(&self) -> Vec<(SectionKind, SectionStatus)> {
        SectionKind::ALL
            .iter()
            .map(|&kind| (kind, self.status(kind)))
            .collect()
    }

    pub fn all_settled(&self) -> bool {
        SectionKind::ALL
            .iter()
            .all(|&kind| self.status(kind) != SectionStatus::Loading)
    }
}

/// Clamp a percentage to `0.0..=100.0`. Non-finite values read as zero.
pub(crate) fn clamp_percent(level: f64) -> f64 {
    if level.is_finite() {
        level.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Deserialize `null` as the type's default.
///
/// The content store returns `null` for projected fields that are unset.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
