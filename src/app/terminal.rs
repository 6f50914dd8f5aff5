use std::io::{self, Stdout};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::debug;

static RESTORE_ON_PANIC: Once = Once::new();

/// Alternate screen in raw mode for the lifetime of the editor. The terminal
/// is handed back on drop, and on panic once any session has started.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = match execute!(io::stdout(), EnterAlternateScreen) {
            Ok(()) => Terminal::new(CrosstermBackend::new(io::stdout())),
            Err(err) => {
                leave();
                return Err(err).context("failed to enter alternate screen");
            }
        };
        let terminal = match terminal {
            Ok(terminal) => terminal,
            Err(err) => {
                leave();
                return Err(err).context("failed to initialize terminal");
            }
        };
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave();
                previous(info);
            }));
        });
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(render)
            .context("failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave();
        debug!("terminal session ended");
    }
}

fn leave() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
