use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::sections::{SectionKind, SectionStatus};

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "folio",
    version,
    about = "Terminal portfolio viewer backed by a headless content store"
)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Content store project id
    #[arg(long, value_name = "ID")]
    pub project: Option<String>,
    /// Content store dataset
    #[arg(long, value_name = "NAME")]
    pub dataset: Option<String>,
    /// Query API host, replacing the project-derived one
    #[arg(long, value_name = "URL")]
    pub api_host: Option<String>,
    /// Show every line immediately instead of animating sections in
    #[arg(long)]
    pub reduced_motion: bool,
    /// Load every section once, print a summary and exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Apply flag overrides. Flags win over the file and the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(project) = &self.project {
            config.content.project_id = project.clone();
        }
        if let Some(dataset) = &self.dataset {
            config.content.dataset = dataset.clone();
        }
        if let Some(host) = &self.api_host {
            config.content.api_host = Some(host.clone());
        }
        if self.reduced_motion {
            config.display.reduced_motion = true;
        }
    }
}

/// Write one `section: status` line per section.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &[(SectionKind, SectionStatus)],
) -> io::Result<()> {
    for (kind, status) in summary {
        match status.reason() {
            Some(reason) => writeln!(out, "{:<13} {} ({})", kind.doc_type(), status.label(), reason)?,
            None => writeln!(out, "{:<13} {}", kind.doc_type(), status.label())?,
        }
    }
    Ok(())
}
