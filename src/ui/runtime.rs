use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::contact::{FormSubmitter, HttpSubmitter};
use crate::content::HttpContentStore;
use crate::diagnostics::DiagnosticLog;
use crate::lifecycle::{wait_for_os_signal, Teardown};
use crate::ui::app::{App, SubmitRequest};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config, runtime: &Handle) -> io::Result<()> {
    let store = HttpContentStore::new(&config.content, &config.network).map_err(io::Error::other)?;
    let store = Arc::new(store);
    let submitter = Arc::new(HttpSubmitter::new(&config.network).map_err(io::Error::other)?);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.display.tick_rate_ms.max(16));
    let teardown = Teardown::new();
    let events = EventHandler::new(tick_rate, teardown.handle());
    let mut app = App::new(config, DiagnosticLog::new());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    spawn_signal_watcher(runtime, &teardown, events.sender());

    let section_tx = events.sender();
    app.sections_mut().mount(runtime, store, &teardown, move |update| {
        let _ = section_tx.send(AppEvent::Section(update));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::Submit(request) = handle_key(&mut app, key) {
                    let tx = events.sender();
                    spawn_submission(runtime, Arc::clone(&submitter), &teardown, tx, request);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Section(update)) => app.apply_section_update(update),
            Ok(AppEvent::SubmissionSettled(result)) => app.finish_submit(result),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Received shutdown signal");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    teardown.signal();
    drop(guard);
    Ok(())
}

fn spawn_signal_watcher(runtime: &Handle, teardown: &Teardown, tx: Sender<AppEvent>) {
    let handle = teardown.handle();
    runtime.spawn(async move {
        if let Err(err) = wait_for_os_signal(&handle).await {
            tracing::warn!(error = %err, "Failed to install signal handlers");
            return;
        }
        if !handle.is_torn_down() {
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}

/// Send the form in the background. The outcome is dropped if the view is
/// torn down first.
fn spawn_submission<S: FormSubmitter>(
    runtime: &Handle,
    submitter: Arc<S>,
    teardown: &Teardown,
    tx: Sender<AppEvent>,
    request: SubmitRequest,
) {
    let handle = teardown.handle();
    runtime.spawn(async move {
        tokio::select! {
            result = submitter.submit(&request.endpoint, &request.form) => {
                if !handle.is_torn_down() {
                    let _ = tx.send(AppEvent::SubmissionSettled(result));
                }
            }
            _ = handle.wait() => {
                tracing::debug!("Submission abandoned on teardown");
            }
        }
    });
}
