#![forbid(unsafe_code)]

//! Interactive host loop: keys in, frames out.
//!
//! One frame is rendered at startup, then one per tick interval. Input is
//! polled between ticks and applied immediately, so a command shows up in
//! the next frame.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dithergen_core::{Animator, Command, GenerationParameters};
use web_time::{Instant, SystemTime, UNIX_EPOCH};

use crate::cli::Opts;
use crate::headless;
use crate::present::Presenter;
use crate::session::TerminalSession;

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Apply(Command),
    /// Reseed from the clock.
    Randomize,
    Quit,
}

/// Map a key event. Releases and repeats of unbound keys return `None`.
pub fn map_key(key: &KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Randomize,
        KeyCode::Up => KeyAction::Apply(Command::NextPattern),
        KeyCode::Down => KeyAction::Apply(Command::PrevPattern),
        KeyCode::Left => KeyAction::Apply(Command::DecreaseFrequency),
        KeyCode::Right => KeyAction::Apply(Command::IncreaseFrequency),
        _ => return None,
    };
    Some(action)
}

/// Seed from the wall clock, truncated to 32 bits.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

/// Build the animator described by `opts`.
pub fn build_animator(opts: &Opts) -> Animator {
    let seed = opts.seed.unwrap_or_else(time_seed);
    let params = GenerationParameters::new(seed).with_pattern(opts.pattern);
    Animator::with_params(opts.size, params)
}

/// Run headless or interactive depending on `opts`.
pub fn run(opts: &Opts) -> io::Result<()> {
    let mut animator = build_animator(opts);
    tracing::info!(
        seed = animator.params().seed,
        width = opts.size.width,
        height = opts.size.height,
        mode = ?opts.mode,
        headless = opts.headless,
        "starting"
    );
    if opts.headless {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return headless::run(&mut out, &mut animator, opts.frames);
    }
    run_interactive(opts, &mut animator)
}

fn run_interactive(opts: &Opts, animator: &mut Animator) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut presenter = Presenter::new(opts.mode);
    let tick = Duration::from_millis(opts.tick_ms.max(1));

    animator.tick();
    presenter.present(session.writer(), animator)?;
    let mut rendered: u64 = 1;
    let mut next_frame = Instant::now() + tick;

    loop {
        if opts.frames > 0 && rendered >= opts.frames {
            break;
        }

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key(&key) {
                    Some(KeyAction::Quit) => break,
                    Some(KeyAction::Randomize) => {
                        animator.apply(Command::Randomize { seed: time_seed() });
                    }
                    Some(KeyAction::Apply(command)) => animator.apply(command),
                    None => {}
                },
                Event::Resize(..) => {
                    session.clear()?;
                    presenter.invalidate();
                }
                _ => {}
            }
            continue;
        }

        animator.tick();
        presenter.present(session.writer(), animator)?;
        rendered += 1;

        next_frame += tick;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind; resume the cadence from now instead of bursting.
            next_frame = now + tick;
        }
    }

    tracing::info!(frames = rendered, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use dithergen_core::{CanvasSize, PatternKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrow_keys_map_to_commands() {
        assert_eq!(
            map_key(&press(KeyCode::Up)),
            Some(KeyAction::Apply(Command::NextPattern))
        );
        assert_eq!(
            map_key(&press(KeyCode::Down)),
            Some(KeyAction::Apply(Command::PrevPattern))
        );
        assert_eq!(
            map_key(&press(KeyCode::Left)),
            Some(KeyAction::Apply(Command::DecreaseFrequency))
        );
        assert_eq!(
            map_key(&press(KeyCode::Right)),
            Some(KeyAction::Apply(Command::IncreaseFrequency))
        );
    }

    #[test]
    fn randomize_and_quit_keys() {
        assert_eq!(map_key(&press(KeyCode::Enter)), Some(KeyAction::Randomize));
        assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(KeyAction::Randomize));
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(KeyAction::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn unbound_and_released_keys_are_ignored() {
        assert_eq!(map_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&press(KeyCode::Tab)), None);
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(&release), None);
    }

    #[test]
    fn build_animator_honours_opts() {
        let opts = Opts {
            seed: Some(5),
            size: CanvasSize::new(40, 20),
            pattern: PatternKind::Radial,
            ..Opts::default()
        };
        let anim = build_animator(&opts);
        assert_eq!(anim.params().seed, 5);
        assert_eq!(anim.params().pattern, PatternKind::Radial);
        assert_eq!(anim.canvas().size(), CanvasSize::new(40, 20));
        assert_eq!(anim.frame_count(), 0);
    }
}
