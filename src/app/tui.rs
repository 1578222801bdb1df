//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard event processing for the TUI application.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};

use tracing::error;

use crate::{Result, TuidoError};

/// Terminal input relevant to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize,
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)
            .map_err(|e| TuidoError::TuiError(format!("Failed to open terminal: {}", e)))?;

        Ok(Self {
            terminal,
            tick_rate,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> Result<()> {
        enable_raw_mode()
            .map_err(|e| TuidoError::TuiError(format!("Failed to enable raw mode: {}", e)))?;
        self.active = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for a key press or resize.
    ///
    /// Key release and repeat events are dropped.
    pub fn next_event(&mut self) -> io::Result<Option<TermEvent>> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(TermEvent::Key(key)))
                }
                Event::Resize(_, _) => return Ok(Some(TermEvent::Resize)),
                _ => {}
            }
        }
        Ok(None)
    }
}

/// Combine the outcome of the main loop with the terminal restore.
///
/// An error from the loop wins; a restore failure behind it is only logged.
pub fn finish(run: Result<()>, restore: io::Result<()>) -> Result<()> {
    match (run, restore) {
        (Err(e), Err(restore_err)) => {
            error!(%restore_err, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), Err(restore_err)) => Err(TuidoError::TuiError(format!(
            "Failed to restore terminal: {}",
            restore_err
        ))),
        (Ok(()), Ok(())) => Ok(()),
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
