//! Calculator engine driven by discrete button presses.
//!
//! This module provides:
//! - The input state machine ([`Calculator`])
//! - Typed input events, operators and functions
//! - Display formatting and parsing
//! - Copying the display to the clipboard

mod clipboard;
mod display;
mod engine;
mod event;
mod operation;

pub use clipboard::copy_to_clipboard;
pub use display::{DisplayState, ERROR_TEXT, format_number, parse_numeral};
pub use engine::Calculator;
pub use event::{Digit, InputEvent};
pub use operation::{BinaryOp, UnaryFn};
