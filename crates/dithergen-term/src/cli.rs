#![forbid(unsafe_code)]

//! Command-line argument parsing for the terminal host.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `DITHERGEN_*` prefix.

use std::env;
use std::process;

use dithergen_core::{CanvasSize, PatternKind};

use crate::present::RenderMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
dithergen: procedural 1-bit patterns, Floyd-Steinberg dithered

USAGE:
    dithergen [OPTIONS]

OPTIONS:
    --seed=N             Starting seed (default: derived from the clock)
    --size=WxH           Canvas size in pixels (default: 128x64)
    --tick-ms=N          Frame interval in milliseconds (default: 33)
    --frames=N           Exit after N frames, 0 = run until quit (default: 0)
    --mode=MODE          Presentation: 'braille' or 'half' (default: braille)
    --pattern=N          Starting pattern 0-9 (default: 0)
    --headless           Print per-frame JSONL instead of drawing
    --help, -h           Show this help message
    --version, -V        Show version

PATTERNS:
    0 horizontal   1 vertical   2 radial         3 diagonal   4 sine
    5 cosine       6 interference 7 checkerboard 8 noise      9 spiral

KEYBINDINGS:
    Enter / Space         Randomize (new seed, pattern, frequency)
    Up / Down             Next / previous pattern
    Left / Right          Decrease / increase frequency
    q / Esc / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    DITHERGEN_SEED        Override --seed
    DITHERGEN_SIZE        Override --size (e.g., 256x128)
    DITHERGEN_TICK_MS     Override --tick-ms
    DITHERGEN_FRAMES      Override --frames
    DITHERGEN_MODE        Override --mode (braille|half)
    DITHERGEN_PATTERN     Override --pattern
    DITHERGEN_HEADLESS    Enable headless mode (1/true)
    DITHERGEN_LOG         Write tracing output to this file
    RUST_LOG              Log filter (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Starting seed. `None` derives one from the clock.
    pub seed: Option<u32>,
    /// Canvas size in pixels.
    pub size: CanvasSize,
    /// Frame interval in milliseconds.
    pub tick_ms: u64,
    /// Auto-exit after N frames (0 = disabled).
    pub frames: u64,
    pub mode: RenderMode,
    pub pattern: PatternKind,
    /// Run without a terminal, emitting JSONL per frame.
    pub headless: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            seed: None,
            size: CanvasSize::DEFAULT,
            tick_ms: 33,
            frames: 0,
            mode: RenderMode::Braille,
            pattern: PatternKind::Horizontal,
            headless: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("dithergen {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("DITHERGEN_SEED")
            && let Ok(n) = val.trim().parse()
        {
            opts.seed = Some(n);
        }
        if let Some(val) = get_env("DITHERGEN_SIZE")
            && let Some(size) = parse_size(&val)
        {
            opts.size = size;
        }
        if let Some(val) = get_env("DITHERGEN_TICK_MS")
            && let Ok(n) = val.trim().parse::<u64>()
            && n > 0
        {
            opts.tick_ms = n;
        }
        if let Some(val) = get_env("DITHERGEN_FRAMES")
            && let Ok(n) = val.trim().parse()
        {
            opts.frames = n;
        }
        if let Some(val) = get_env("DITHERGEN_MODE")
            && let Some(mode) = RenderMode::parse(&val)
        {
            opts.mode = mode;
        }
        if let Some(val) = get_env("DITHERGEN_PATTERN")
            && let Some(pattern) = parse_pattern(&val)
        {
            opts.pattern = pattern;
        }
        if let Some(val) = get_env("DITHERGEN_HEADLESS") {
            opts.headless = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Parse command-line args (override env vars)
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--headless" => opts.headless = true,
                other => {
                    if let Some(val) = other.strip_prefix("--seed=") {
                        opts.seed = Some(parse_flag("--seed", val, |v| v.parse().ok())?);
                    } else if let Some(val) = other.strip_prefix("--size=") {
                        opts.size = parse_flag("--size", val, parse_size)?;
                    } else if let Some(val) = other.strip_prefix("--tick-ms=") {
                        opts.tick_ms = parse_flag("--tick-ms", val, |v| {
                            v.parse().ok().filter(|&n: &u64| n > 0)
                        })?;
                    } else if let Some(val) = other.strip_prefix("--frames=") {
                        opts.frames = parse_flag("--frames", val, |v| v.parse().ok())?;
                    } else if let Some(val) = other.strip_prefix("--mode=") {
                        opts.mode = parse_flag("--mode", val, RenderMode::parse)?;
                    } else if let Some(val) = other.strip_prefix("--pattern=") {
                        opts.pattern = parse_flag("--pattern", val, parse_pattern)?;
                    } else {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    }
                }
            }
        }
        Ok(opts)
    }
}

fn parse_flag<T>(
    flag: &'static str,
    val: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ParseError> {
    parse(val).ok_or_else(|| ParseError::InvalidValue {
        flag,
        value: val.to_string(),
    })
}

/// Parse `WxH`; both extents must be nonzero.
fn parse_size(raw: &str) -> Option<CanvasSize> {
    let trimmed = raw.trim();
    let mut parts = trimmed.split(['x', 'X']);
    let width: u16 = parts.next()?.parse().ok()?;
    let height: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || width == 0 || height == 0 {
        return None;
    }
    Some(CanvasSize::new(width, height))
}

/// Parse a pattern index `0..=9`.
fn parse_pattern(raw: &str) -> Option<PatternKind> {
    let index: u8 = raw.trim().parse().ok()?;
    (index < PatternKind::COUNT).then(|| PatternKind::from_index(index))
}
