use thiserror::Error;

use crate::{
    display::DisplaySurface,
    number::is_valid_number,
    ops::{ComputeError, Operation, compute_value},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Enter a number before an operation")]
    MissingOperand,
    #[error("No operation selected or missing first number")]
    IncompleteExpression,
    #[error("Invalid data for the second number")]
    InvalidSecondOperand,
    #[error("Unknown operation")]
    UnknownOperation,
    #[error("{0}")]
    Compute(ComputeError),
}

impl From<ComputeError> for EngineError {
    fn from(value: ComputeError) -> Self {
        Self::Compute(value)
    }
}

/// The calculator state machine. Holds the left-hand operand of an
/// in-progress computation and the operation awaiting its second number;
/// the input field itself lives on the display surface.
///
/// Invariant: a failing entry point writes its message to the output
/// field and leaves the pending state and input text untouched.
pub struct Calculator<D: DisplaySurface> {
    display: D,
    previous: Option<String>,
    operation: Option<Operation>,
}

impl<D: DisplaySurface> Calculator<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            previous: None,
            operation: None,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.operation
    }

    fn current(&self) -> String {
        self.display.input_text().trim().to_string()
    }

    fn fail(&mut self, err: EngineError) -> Result<(), EngineError> {
        self.display.set_output_text(&err.to_string());
        Err(err)
    }

    pub fn append_number(&mut self, token: char) {
        let cur = self.current();
        if token == '.' && cur.contains('.') {
            return;
        }
        // typing a digit over a lone zero replaces it, no "05"
        if cur == "0" && token != '.' {
            self.display.set_input_text(&token.to_string());
            return;
        }
        let mut next = cur;
        next.push(token);
        self.display.set_input_text(&next);
    }

    /// With a complete operand+operation+number already present this
    /// evaluates the running total first, so operations chain without
    /// pressing equals.
    pub fn set_operation(&mut self, op: Operation) -> Result<(), EngineError> {
        let cur = self.current();
        let valid = is_valid_number(&cur);
        if !valid && self.previous.is_none() {
            return self.fail(EngineError::MissingOperand);
        }
        if valid {
            if let Some(prev) = self.previous.clone() {
                let Some(pending) = self.operation else {
                    return self.fail(EngineError::UnknownOperation);
                };
                let result = match compute_value(&prev, &cur, pending) {
                    Ok(x) => x.to_string(),
                    Err(err) => return self.fail(err.into()),
                };
                self.display.set_output_text(&result);
                self.previous = Some(result);
            } else {
                self.previous = Some(cur);
            }
        }
        self.operation = Some(op);
        // ready for the second operand
        self.display.set_input_text("");
        Ok(())
    }

    pub fn clear_display(&mut self) {
        self.previous = None;
        self.operation = None;
        self.display.set_input_text("");
        self.display.set_output_text("");
    }

    pub fn calculate_result(&mut self) -> Result<(), EngineError> {
        let cur = self.current();
        let (Some(prev), Some(op)) = (self.previous.clone(), self.operation) else {
            return self.fail(EngineError::IncompleteExpression);
        };
        if !is_valid_number(&cur) {
            return self.fail(EngineError::InvalidSecondOperand);
        }
        let result = match compute_value(&prev, &cur, op) {
            Ok(x) => x.to_string(),
            Err(err) => return self.fail(err.into()),
        };
        self.display.set_output_text(&result);
        self.previous = Some(result);
        self.operation = None;
        self.display.set_input_text("");
        Ok(())
    }
}
