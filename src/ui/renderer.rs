//! Terminal host loop: draws the engine's frame and feeds it input and
//! queued commands.

use super::core::{Event, EventHandler};
use super::engine::Engine;
use super::host::Host;
use crate::constants::INPUT_POLL_INTERVAL_MS;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use tokio::time::Duration;

/// Run the engine in the terminal until a quit key is pressed
pub async fn run_app(engine: Engine) -> Result<()> {
    let mut host = Host::new(engine);
    host.start()?;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    host.dispatch(Event::Resize {
        width: size.width,
        height: size.height,
    });

    let mut event_handler = EventHandler::new(Duration::from_millis(INPUT_POLL_INTERVAL_MS));
    let result = run_app_loop(&mut terminal, &mut host, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    host: &mut Host,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        let frame = host.render();
        terminal.draw(|f| f.render_widget(Paragraph::new(frame.as_str()), f.area()))?;

        if host.should_quit() {
            break;
        }

        // Commands and input interleave in arrival order; the command branch
        // is only polled while the engine's listener is armed.
        let event = tokio::select! {
            Some(command) = host.next_command(), if host.is_listening() => Event::Command(command),
            Some(event) = event_handler.next_event() => event,
            else => break,
        };

        host.dispatch(event);
    }

    Ok(())
}
