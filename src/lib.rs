//! # ramadan-clock library
//!
//! Internal library for the `ramadan-clock` binary.
//!
//! The library exists to keep the engine testable and separate from CLI
//! dispatch (main.rs).
//!
//! ## Architecture
//!
//! - **Engine**: `solar` estimates sunset for a coordinate, `events` turns
//!   estimates into a ranked iftar board, `calendar` reads the fasting
//!   calendar and finds the next Suhoor or Iftaar
//! - **Commands**: `commands` builds reports from the engine and prints them
//!   as decorated logs or JSON
//! - **Configuration**: `config` for TOML settings
//! - **Infrastructure**: `time_source` for real and pinned clocks, `logger`
//!   for output, `args` for command-line parsing

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod constants;
pub mod events;
pub mod solar;
pub mod time_source;
