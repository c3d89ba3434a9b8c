#![forbid(unsafe_code)]

//! Terminal lifecycle guard.
//!
//! [`TerminalSession::enter`] switches to raw mode and the alternate screen
//! with the cursor hidden. Dropping the session restores the terminal, so an
//! early `?` return still leaves the shell usable. Release builds abort on
//! panic, so a panic hook performs the same restore before the message prints.

use std::io::{self, Stdout, Write};
use std::sync::Once;

use crossterm::{
    cursor, execute,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

static PANIC_HOOK: Once = Once::new();

fn restore_terminal() {
    let mut out = io::stdout();
    let _ = execute!(
        out,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

#[derive(Debug)]
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        tracing::debug!("terminal session entered");
        Ok(Self { out })
    }

    /// Clear the screen, e.g. after a resize.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All))
    }

    pub fn writer(&mut self) -> &mut impl Write {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.out.flush();
        restore_terminal();
        tracing::debug!("terminal session restored");
    }
}
