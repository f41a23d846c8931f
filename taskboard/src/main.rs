//! `Taskboard` -- terminal task board.
//!
//! Loads the task list from the remote service on startup and keeps the
//! board in sync as tasks are created, edited and deleted. Configuration
//! via CLI flags, environment variables, or config file
//! (`~/.config/taskboard/config.toml`).
//!
//! ```bash
//! # Against a service on the default URL
//! cargo run --bin taskboard
//!
//! # Against a local dev server
//! cargo run --bin taskboard-devserver &
//! cargo run --bin taskboard -- --base-url http://127.0.0.1:3000
//!
//! # Offline demo with an in-memory task list
//! cargo run --bin taskboard -- --offline
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use taskboard::app::App;
use taskboard::board::TaskBoard;
use taskboard::config::{CliArgs, ClientConfig};
use taskboard::service::{HttpTaskService, InMemoryTaskService, TaskService};
use taskboard::ui;
use taskboard_proto::{Task, TaskId};

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::from_cli(&cli)
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(base_url = %config.base_url, offline = config.offline, "taskboard starting");

    if config.offline {
        return run(TaskBoard::new(demo_service()), &config).await;
    }

    let service = match HttpTaskService::new(
        &config.base_url,
        config.connect_timeout,
        config.request_timeout,
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };
    run(TaskBoard::new(service), &config).await
}

/// Set up the terminal, run the app, and restore the terminal.
async fn run<S: TaskService>(board: TaskBoard<S>, config: &ClientConfig) -> io::Result<()> {
    let mut board = board.with_filter(config.default_filter);
    if !board.load().await {
        tracing::warn!("initial load failed; starting with an empty board");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(board), config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskboard exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskboard.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main event loop: draw, poll a key, run any remote command it produced.
///
/// Remote commands are awaited inline, so the board handles one operation
/// at a time.
async fn run_app<S: TaskService>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<S>,
    config: &ClientConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(command) = app.handle_key_event(key) {
                app.run_command(command).await;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// In-memory service seeded with a few tasks for `--offline`.
fn demo_service() -> InMemoryTaskService {
    let task = |id: &str, name: &str, description: &str, done: bool, priority: &str| Task {
        id: TaskId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        done,
        priority: priority.to_string(),
    };
    InMemoryTaskService::with_tasks(vec![
        task("demo-1", "Plan sprint", "Pick stories for next week", false, "high"),
        task("demo-2", "Review PR", "Config loader changes", true, "medium"),
        task("demo-3", "Update docs", "Describe the offline mode", false, "low"),
    ])
}
