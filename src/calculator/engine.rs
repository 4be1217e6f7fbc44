//! The calculator input state machine.
//!
//! One [`Calculator`] owns one session. Each input runs to completion, updates
//! every state field it touches, and reports the new display text to the
//! render callback exactly once.

use super::display::{DisplayState, format_number};
use super::event::{Digit, InputEvent};
use super::operation::{BinaryOp, UnaryFn};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A running calculation driven by button presses.
pub struct Calculator {
    display: DisplayState,
    /// Left-hand operand of the operation in progress.
    pending_operand: Option<f64>,
    /// Operator waiting for a second operand. Never set without an operand.
    pending_operator: Option<BinaryOp>,
    /// The next digit or decimal starts a fresh numeral.
    awaiting_second_operand: bool,
    on_render: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("display", &self.display)
            .field("pending_operand", &self.pending_operand)
            .field("pending_operator", &self.pending_operator)
            .field("awaiting_second_operand", &self.awaiting_second_operand)
            .finish_non_exhaustive()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: DisplayState::default(),
            pending_operand: None,
            pending_operator: None,
            awaiting_second_operand: false,
            on_render: None,
        }
    }

    /// Set the callback that receives the display text after every input.
    pub fn set_on_render(&mut self, callback: impl Fn(&str) + Send + Sync + 'static) {
        self.on_render = Some(Arc::new(callback));
    }

    /// Current display state.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Current display text, as the sink would show it.
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Check if the session is in its initial state.
    pub fn is_cleared(&self) -> bool {
        self.display == DisplayState::default()
            && self.pending_operand.is_none()
            && self.pending_operator.is_none()
            && !self.awaiting_second_operand
    }

    /// Dispatch a classified input event.
    pub fn handle(&mut self, event: InputEvent) -> &str {
        debug!(%event, "input");
        match event {
            InputEvent::Digit(digit) => self.input_digit(digit),
            InputEvent::Decimal => self.input_decimal(),
            InputEvent::Operator(op) => self.handle_operator(op),
            InputEvent::Function(func) => self.handle_function(func),
            InputEvent::Clear => self.clear(),
        }
    }

    /// Type a digit.
    ///
    /// Starts a fresh numeral after an error or an operator, replaces a lone
    /// `0`, and otherwise appends.
    pub fn input_digit(&mut self, digit: Digit) -> &str {
        if self.display.is_error() || self.awaiting_second_operand {
            self.display = DisplayState::Numeral(digit.to_string());
            self.awaiting_second_operand = false;
        } else if let DisplayState::Numeral(text) = &mut self.display {
            if text == "0" {
                text.clear();
            }
            text.push(digit.as_char());
        }

        self.render()
    }

    /// Type a decimal point. At most one is ever present in the numeral.
    pub fn input_decimal(&mut self) -> &str {
        if self.display.is_error() || self.awaiting_second_operand {
            self.display = DisplayState::Numeral("0.".to_string());
            self.awaiting_second_operand = false;
        } else if let DisplayState::Numeral(text) = &mut self.display
            && !text.contains('.')
        {
            text.push('.');
        }

        self.render()
    }

    /// Press a binary operator.
    ///
    /// The first operator stores the displayed value as the left operand.
    /// Later operators apply the pending one and show the running result.
    /// Pressing operators back to back only replaces the pending operator.
    pub fn handle_operator(&mut self, op: BinaryOp) -> &str {
        if self.display.is_error() {
            debug!(%op, "operator pressed in error state, resetting");
            return self.clear();
        }

        let Some(input) = self.display.value() else {
            return self.enter_error();
        };

        if self.pending_operator.is_some() && self.awaiting_second_operand {
            debug!(%op, "replacing pending operator");
            self.pending_operator = Some(op);
            return self.render();
        }

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(input),
            (Some(lhs), Some(pending)) => match pending.apply(lhs, input) {
                Some(result) => {
                    debug!(lhs, rhs = input, op = %pending, result, "applied operator");
                    self.display = DisplayState::Numeral(format_number(result));
                    self.pending_operand = Some(result);
                }
                None => return self.enter_error(),
            },
            // A function result is pending with no operator; it stays the
            // left operand.
            (Some(_), None) => {}
        }

        self.awaiting_second_operand = true;
        self.pending_operator = Some(op);
        self.render()
    }

    /// Apply a unary function to the displayed value.
    ///
    /// The result becomes the pending operand and any pending operator is
    /// dropped.
    pub fn handle_function(&mut self, func: UnaryFn) -> &str {
        if self.display.is_error() {
            debug!(%func, "function pressed in error state, resetting");
            return self.clear();
        }

        let Some(input) = self.display.value() else {
            return self.enter_error();
        };

        let Some(result) = func.apply(input) else {
            return self.enter_error();
        };

        debug!(input, %func, result, "applied function");
        self.display = DisplayState::Numeral(format_number(result));
        self.pending_operand = Some(result);
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.render()
    }

    /// Reset the session to its initial state.
    pub fn clear(&mut self) -> &str {
        self.display = DisplayState::default();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.render()
    }

    /// Show the error state and drop all pending arithmetic.
    fn enter_error(&mut self) -> &str {
        warn!(
            display = self.display.as_str(),
            operand = ?self.pending_operand,
            operator = ?self.pending_operator,
            "calculation error"
        );
        self.display = DisplayState::Error;
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.render()
    }

    fn render(&self) -> &str {
        let text = self.display.as_str();
        if let Some(on_render) = &self.on_render {
            on_render(text);
        }
        text
    }
}
