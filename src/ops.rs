use thiserror::Error;

use crate::number::{is_valid_number, round_to_two};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Invalid numbers entered")]
    InvalidOperands,
    #[error("Error: division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Arithmetic step over textual operands. Operands are re-validated even
/// though callers already check them. Integer results pass through
/// unrounded, everything else is rounded to two decimal places.
pub fn compute_value(a_text: &str, b_text: &str, op: Operation) -> Result<f64, ComputeError> {
    if !is_valid_number(a_text) || !is_valid_number(b_text) {
        return Err(ComputeError::InvalidOperands);
    }
    let a: f64 = a_text
        .trim()
        .parse()
        .map_err(|_| ComputeError::InvalidOperands)?;
    let b: f64 = b_text
        .trim()
        .parse()
        .map_err(|_| ComputeError::InvalidOperands)?;

    let raw = match op {
        Operation::Add => a + b,
        Operation::Sub => a - b,
        Operation::Mul => a * b,
        Operation::Div => {
            if b == 0.0 {
                return Err(ComputeError::DivisionByZero);
            }
            a / b
        }
    };

    if raw.fract() == 0.0 {
        Ok(raw)
    } else {
        Ok(round_to_two(raw))
    }
}
