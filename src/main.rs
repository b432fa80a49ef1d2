mod error;
mod fact;
mod notice;
mod paths;
mod repository;
mod store;
mod task;
mod theme;
mod ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use repository::JsonFileRepository;
use store::TaskStore;
use std::io;
use tracing_subscriber::EnvFilter;
use ui::App;

fn main() -> anyhow::Result<()> {
    // The guard flushes buffered log lines on drop; keep it for the whole run.
    let _log_guard = init_logging();

    let repo = JsonFileRepository::new(paths::data_dir());
    let store = TaskStore::open(Box::new(repo))?;
    let mut app = App::new(store);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("taskdeck starting");
    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save state
    app.store().save_all()?;

    result?;
    tracing::info!("taskdeck shut down cleanly");
    Ok(())
}

/// Route logs to a file under the data directory; the terminal belongs to
/// the TUI. Falls back to stderr if the log directory cannot be created.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=info"));

    let dir = paths::logs_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!(
            "warn: could not create log directory '{}': {err}; logging to stderr",
            dir.display()
        );
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, "taskdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Some(guard)
}
