//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the panel in TUI mode
///
/// Sets up the terminal, runs the UI loop until the user quits, restores the
/// terminal and waits for the poller to stop.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.endpoint);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, session.effect_duration);
    let app = ui::App::new(
        session.endpoint.clone(),
        session.message_sender,
        session.message_receiver,
        session.shutdown_sender.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // An I/O error inside the loop skips App::shutdown, so signal again.
    let _ = session.shutdown_sender.send(());
    result?;

    print_session_shutdown();
    let _ = session.poll_handle.await;
    print_session_exit_success();

    Ok(())
}
