use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use devcatalyst::{
    app::App,
    cli::{init_tracing, Cli},
    config::Config,
    task_store::TaskStore,
    ui,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_file.as_deref(), !cli.snapshot)?;

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    let settings = cli.session_settings(&config)?;
    let store = TaskStore::sample().context("failed to load task data")?;
    info!(tasks = store.len(), clock = ?settings.clock, "starting dashboard");

    let mut app = App::new(config, store, settings.clock).with_controls(settings.filter, settings.sort);

    if cli.snapshot {
        let frame = ui::render_snapshot(&app, cli.width, cli.height)?;
        println!("{}", frame);
        return Ok(());
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("dashboard event loop failed")
}
