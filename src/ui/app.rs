use std::collections::HashMap;

use crate::config::{Config, DisplayConfig};
use crate::contact::{resolve_endpoint, ContactForm, FormField, FormState, SubmitError};
use crate::content::ImageUrlBuilder;
use crate::diagnostics::DiagnosticLog;
use crate::filter::ProjectFilter;
use crate::motion::AnimationPreset;
use crate::sections::{SectionKind, SectionStatus, SectionUpdate, Sections};

const SPINNER: [char; 4] = ['⠋', '⠙', '⠸', '⠴'];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Status,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Browsing the page.
    Page,
    /// Typing into a contact form field.
    Form(FormField),
    Popup(PopupKind),
}

/// A validated form ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub form: FormState,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    active: SectionKind,
    scroll: u16,
    sections: Sections,
    contact: ContactForm,
    filter: ProjectFilter,
    diagnostics: DiagnosticLog,
    images: ImageUrlBuilder,
    fallback_endpoint: String,
    display: DisplayConfig,
    tick: u32,
    /// Tick at which each section first had something to show.
    ready_at: HashMap<SectionKind, u32>,
}

impl App {
    pub fn new(config: &Config, diagnostics: DiagnosticLog) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Page,
            size: None,
            active: SectionKind::Hero,
            scroll: 0,
            sections: Sections::new(),
            contact: ContactForm::new(),
            filter: ProjectFilter::new(),
            diagnostics,
            images: ImageUrlBuilder::from_config(&config.content),
            fallback_endpoint: config.contact.fallback_endpoint.clone(),
            display: config.display.clone(),
            tick: 0,
            ready_at: HashMap::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut Sections {
        &mut self.sections
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    // -- Navigation -----------------------------------------------------------

    pub fn active_section(&self) -> SectionKind {
        self.active
    }

    pub fn select_section(&mut self, kind: SectionKind) {
        if self.active != kind {
            self.active = kind;
            self.scroll = 0;
        }
    }

    pub fn next_section(&mut self) {
        self.step_section(1);
    }

    pub fn previous_section(&mut self) {
        self.step_section(-1);
    }

    fn step_section(&mut self, delta: isize) {
        let nav = SectionKind::NAV;
        let current = nav.iter().position(|k| *k == self.active).unwrap_or(0) as isize;
        let index = (current + delta).rem_euclid(nav.len() as isize) as usize;
        self.select_section(nav[index]);
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    // -- Focus / popups -------------------------------------------------------

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn show_popup(&self) -> bool {
        matches!(self.focus, Focus::Popup(_))
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn toggle_popup(&mut self, kind: PopupKind) -> bool {
        self.focus = match self.focus {
            Focus::Popup(active) if active == kind => Focus::Page,
            _ => Focus::Popup(kind),
        };
        self.show_popup()
    }

    pub fn close_popup(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn editing_field(&self) -> Option<FormField> {
        match self.focus {
            Focus::Form(field) => Some(field),
            _ => None,
        }
    }

    /// Enter the contact form. Only possible while the contact section is
    /// shown.
    pub fn start_editing(&mut self) -> bool {
        if self.active != SectionKind::Contact || self.sections.contact.effective().is_none() {
            return false;
        }
        self.focus = Focus::Form(FormField::Name);
        true
    }

    pub fn stop_editing(&mut self) {
        if self.editing_field().is_some() {
            self.focus = Focus::Page;
        }
    }

    pub fn focus_field(&mut self, field: FormField) {
        if self.editing_field().is_some() {
            self.focus = Focus::Form(field);
        }
    }

    // -- Events ---------------------------------------------------------------

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Apply a settled section load. Failures are recorded for the status
    /// popup; they are never rendered inline.
    pub fn apply_section_update(&mut self, update: SectionUpdate) {
        let kind = update.kind();
        if let Some(message) = update.failure() {
            self.diagnostics.record(kind.doc_type(), message);
        }
        self.sections.apply(update);
        if self.sections.status(kind) != SectionStatus::Loading {
            self.ready_at.entry(kind).or_insert(self.tick);
        }
    }

    /// Number of `total` lines to show for `kind` at the current tick.
    pub fn revealed_lines(&self, kind: SectionKind, total: usize) -> usize {
        let Some(start) = self.ready_at.get(&kind) else {
            return total;
        };
        AnimationPreset::for_section(kind).revealed(
            self.tick.wrapping_sub(*start),
            total,
            self.display.reduced_motion,
        )
    }

    pub fn spinner(&self) -> char {
        SPINNER[(self.tick as usize) % SPINNER.len()]
    }

    // -- Contact form ---------------------------------------------------------

    pub fn on_form_input(&mut self, field: FormField, ch: char) {
        self.contact.push_char(field, ch);
    }

    pub fn on_form_backspace(&mut self, field: FormField) {
        self.contact.pop_char(field);
    }

    /// Validate and start a submission against the effective endpoint.
    pub fn submit_contact(&mut self) -> Option<SubmitRequest> {
        let form = self.contact.begin_submit()?;
        let endpoint = resolve_endpoint(self.sections.contact.effective(), &self.fallback_endpoint);
        tracing::info!(endpoint = %endpoint, "Submitting contact form");
        Some(SubmitRequest { endpoint, form })
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        self.contact.finish_submit(result);
    }

    // -- Projects -------------------------------------------------------------

    pub fn next_tag(&mut self) {
        if let Some(doc) = self.sections.projects.effective() {
            self.filter.next(&doc.projects_list);
        }
    }

    pub fn previous_tag(&mut self) {
        if let Some(doc) = self.sections.projects.effective() {
            self.filter.previous(&doc.projects_list);
        }
    }
}
