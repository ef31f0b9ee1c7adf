mod app;
mod config;
mod confirm;
mod money;
mod notification;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;
use notification::Severity;

#[derive(Parser, Debug)]
#[command(name = "shopman")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "Terminal UI helpers for the Shop Management System")]
struct Args {
    /// Format a value as currency and print it
    #[arg(short, long)]
    amount: Option<String>,

    /// Send a desktop notification with the given message
    #[arg(short, long)]
    notify: Option<String>,

    /// Severity for --notify (info, success, warning, danger)
    #[arg(short, long, default_value = "info")]
    level: String,

    /// Reset saved settings to defaults
    #[arg(long)]
    reset_config: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if let Some(value) = args.amount {
        println!("{}", money::format_currency(value));
        return Ok(());
    }

    if let Some(message) = args.notify {
        let severity = Severity::parse(&args.level);
        return notification::send_desktop(&message, severity);
    }

    if args.reset_config {
        return reset_config();
    }

    // Run TUI
    run_tui()
}

fn reset_config() -> Result<()> {
    if confirm::confirm_action("Reset saved settings to defaults?")? {
        AppConfig::reset()?;
        println!("Settings reset.");
    } else {
        println!("Cancelled.");
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();
    ui::init_theme(theme::Theme::load(&config.theme));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config);

    // Startup is done; announce it once
    tracing::info!("Shop Management System loaded");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        event::KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and surface any errors instead of crashing
                            if let Err(e) = app.handle_key(key) {
                                app.notify(format!("Error: {}", e), Severity::Danger);
                            }
                        }
                    }
                }
            }
        }

        // Expire old notifications
        app.tick();
    }
}
