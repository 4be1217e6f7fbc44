//! A calculator driven by button presses.
//!
//! [`calculator::Calculator`] is the state machine. [`input::KeyMap`] turns raw
//! key labels into [`calculator::InputEvent`]s, and [`config::Config`] holds
//! user settings for the terminal front end.

pub mod calculator;
pub mod config;
pub mod error;
pub mod input;

pub use calculator::{Calculator, InputEvent};
pub use error::{Error, Result};
