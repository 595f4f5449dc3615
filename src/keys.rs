use crate::{display::DisplaySurface, engine::Calculator, ops::Operation};

// Equals covers both the '=' key and a bare Enter, Clear covers 'c'/Escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operation(Operation),
    Equals,
    Clear,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            return Some(Self::Digit(c));
        }
        if let Some(op) = Operation::from_symbol(c) {
            return Some(Self::Operation(op));
        }
        match c {
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

// Failing presses already put their message on the output field.
pub fn press<D: DisplaySurface>(calc: &mut Calculator<D>, key: Key) {
    match key {
        Key::Digit(digit) => calc.append_number(digit),
        Key::Point => calc.append_number('.'),
        Key::Operation(op) => {
            let _ = calc.set_operation(op);
        }
        Key::Equals => {
            let _ = calc.calculate_result();
        }
        Key::Clear => calc.clear_display(),
    }
}

pub fn press_line<D: DisplaySurface>(calc: &mut Calculator<D>, line: &str) {
    let mut pressed = false;
    for c in line.chars() {
        if let Some(key) = Key::from_char(c) {
            press(calc, key);
            pressed = true;
        }
    }
    if !pressed && line.trim().is_empty() {
        press(calc, Key::Equals);
    }
}
