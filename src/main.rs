use std::io;

use anyhow::Context;
use clap::Parser;

use folio::cli::{write_summary, Cli};
use folio::config::Config;
use folio::content::HttpContentStore;
use folio::logging::init_tracing;
use folio::sections::Sections;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.check {
        let store = HttpContentStore::new(&config.content, &config.network)
            .context("failed to build content client")?;
        let sections = runtime.block_on(Sections::load_all(&store));
        let mut stdout = io::stdout().lock();
        write_summary(&mut stdout, &sections.summary())?;
        return Ok(());
    }

    tracing::info!(
        project = %config.content.project_id,
        dataset = %config.content.dataset,
        "Starting folio"
    );
    folio::ui::run(&config, runtime.handle())?;
    runtime.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    config.apply_env();
    cli.apply(&mut config);
    config.validate().context("invalid config")?;
    Ok(config)
}
