use paperdesk::{actions, event, model, store, ui};

use anyhow::Result;
use clap::Parser;
use paperdesk::config::{load_config, AppConfig, CliArgs};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paperdesk::AppState;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    init_logging(&config)?;

    // Create application state
    let mut ids = model::RandomIds;
    let paper_store: Box<dyn store::PaperStore> = if args.empty {
        Box::new(store::MemoryStore::new())
    } else {
        Box::new(store::MemoryStore::with_samples(&mut ids))
    };
    let mut app = AppState::with_parts(
        config,
        paper_store,
        Box::new(store::PlaceholderUploader),
        Box::new(ids),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// The alternate screen owns stdout/stderr, so logging goes to a file or
/// nowhere.
fn init_logging(config: &AppConfig) -> Result<()> {
    if let Some(ref path) = config.log_file {
        let file = File::create(path)?;
        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        log::info!("paperdesk starting");
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
