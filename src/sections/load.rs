//! Fetch-with-fallback lifecycle shared by every section.
//!
//! A section mounts in `Pending`, issues exactly one query, and settles
//! once into `Loaded` or `Failed`. Sections that declare a fallback
//! document present it whenever the load fails.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::content::{ContentError, ContentStore};
use crate::lifecycle::TeardownHandle;
use crate::sections::{SectionDocument, SectionUpdate};
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Load state of one section.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<D> {
    /// Fetch issued, not yet settled.
    Pending,
    /// Fetch returned a document.
    Loaded(D),
    /// Fetch failed or matched nothing.
    Failed(String),
}

impl<D> Default for LoadState<D> {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl<D: SectionDocument> UiState for LoadState<D> {}

impl<D> LoadState<D> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn document(&self) -> Option<&D> {
        match self {
            Self::Loaded(document) => Some(document),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum LoadIntent<D> {
    /// A fetch attempt starts. Always resets to a fresh `Pending`.
    Begin,
    /// The fetch produced a document.
    Resolve(D),
    /// The fetch failed.
    Reject(String),
}

impl<D: Send + 'static> Intent for LoadIntent<D> {}

impl<D> LoadIntent<D> {
    /// Intent that replays a settled state. `Pending` has no counterpart.
    pub fn from_settled(state: LoadState<D>) -> Option<Self> {
        match state {
            LoadState::Pending => None,
            LoadState::Loaded(document) => Some(LoadIntent::Resolve(document)),
            LoadState::Failed(message) => Some(LoadIntent::Reject(message)),
        }
    }
}

pub struct LoadReducer<D>(PhantomData<D>);

impl<D: SectionDocument> Reducer for LoadReducer<D> {
    type State = LoadState<D>;
    type Intent = LoadIntent<D>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (_, LoadIntent::Begin) => LoadState::Pending,
            (LoadState::Pending, LoadIntent::Resolve(document)) => LoadState::Loaded(document),
            (LoadState::Pending, LoadIntent::Reject(message)) => LoadState::Failed(message),
            // One terminal transition per mount.
            (settled, _) => settled,
        }
    }
}

/// How a section should be presented right now.
#[derive(Debug, PartialEq)]
pub enum SectionView<'a, D> {
    /// Fetch in flight.
    Loading,
    /// Render `document`; `from_fallback` marks substituted content.
    Ready { document: &'a D, from_fallback: bool },
    /// Failed with no fallback: render nothing.
    Hidden,
}

/// Load state plus the section's static fallback document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSlot<D> {
    state: LoadState<D>,
    fallback: Option<D>,
}

impl<D: SectionDocument> SectionSlot<D> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Pending,
            fallback: D::fallback(),
        }
    }

    pub fn state(&self) -> &LoadState<D> {
        &self.state
    }

    pub fn fallback(&self) -> Option<&D> {
        self.fallback.as_ref()
    }

    pub fn dispatch(&mut self, intent: LoadIntent<D>) {
        self.state = LoadReducer::<D>::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Loaded document, or the fallback once the load has failed.
    pub fn effective(&self) -> Option<&D> {
        match &self.state {
            LoadState::Pending => None,
            LoadState::Loaded(document) => Some(document),
            LoadState::Failed(_) => self.fallback.as_ref(),
        }
    }

    pub fn view(&self) -> SectionView<'_, D> {
        match &self.state {
            LoadState::Pending => SectionView::Loading,
            LoadState::Loaded(document) => SectionView::Ready {
                document,
                from_fallback: false,
            },
            LoadState::Failed(_) => match &self.fallback {
                Some(document) => SectionView::Ready {
                    document,
                    from_fallback: true,
                },
                None => SectionView::Hidden,
            },
        }
    }
}

impl<D: SectionDocument> Default for SectionSlot<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue the section's single query and settle it.
///
/// A `null` result settles as `Failed("No <type> data found")`; transport,
/// status and decode errors settle with their message.
pub async fn load_document<D, S>(store: &S) -> LoadState<D>
where
    D: SectionDocument,
    S: ContentStore,
{
    let doc_type = D::KIND.doc_type();
    match fetch_document::<D, S>(store).await {
        Ok(document) => {
            tracing::info!(section = doc_type, "Section loaded");
            LoadState::Loaded(document)
        }
        Err(err) => {
            tracing::warn!(
                section = doc_type,
                kind = ?err.kind(),
                error = %err,
                "Section load failed"
            );
            LoadState::Failed(err.to_string())
        }
    }
}

async fn fetch_document<D, S>(store: &S) -> Result<D, ContentError>
where
    D: SectionDocument,
    S: ContentStore,
{
    let doc_type = D::KIND.doc_type();
    let value = store
        .fetch(&D::query())
        .await?
        .ok_or(ContentError::Empty { doc_type })?;
    let document: D =
        serde_json::from_value(value).map_err(|e| ContentError::Decode { doc_type, source: e })?;
    Ok(document.prepare())
}

/// Spawn the mount-time fetch for `D`.
///
/// `deliver` is called at most once, with the settled state, and never
/// after teardown.
pub fn spawn_loader<D, S, F>(
    runtime: &Handle,
    store: Arc<S>,
    teardown: TeardownHandle,
    deliver: F,
) -> JoinHandle<()>
where
    D: SectionDocument,
    S: ContentStore,
    F: FnOnce(SectionUpdate) + Send + 'static,
{
    runtime.spawn(async move {
        let state = tokio::select! {
            state = load_document::<D, S>(store.as_ref()) => state,
            _ = teardown.wait() => {
                tracing::debug!(section = D::KIND.doc_type(), "Load cancelled by teardown");
                return;
            }
        };
        if teardown.is_torn_down() {
            return;
        }
        deliver(D::into_update(state));
    })
}
