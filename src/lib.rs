//! Terminal portfolio viewer. Sections are read from a headless content
//! store, shown with canned fallbacks where the store has nothing, and the
//! contact form posts to a form-handling endpoint.

pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod filter;
pub mod lifecycle;
pub mod logging;
pub mod motion;
pub mod sections;
pub mod ui;
