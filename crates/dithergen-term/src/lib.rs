#![forbid(unsafe_code)]

//! Terminal host for `dithergen-core`.
//!
//! This library exposes the host internals so that integration tests can
//! parse options, map keys, encode frames, and drive the headless harness
//! without a real terminal.
//!
//! # How it fits
//! The core crate knows nothing about time or I/O. This crate supplies the
//! clock (tick cadence and randomize seeds), keyboard input, the terminal
//! session, and the text encoding of each dithered frame.

pub mod app;
pub mod cli;
pub mod headless;
pub mod logging;
pub mod present;
pub mod session;
