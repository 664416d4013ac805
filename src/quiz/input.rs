use std::fmt;

use thiserror::Error;

/// Rendered in place of an empty buffer so the display never collapses.
pub const BLANK_PLACEHOLDER: &str = " ";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a keypad digit: {0}")]
pub struct DigitError(pub u32);

/// A single keypad digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const ONE: Digit = Digit(1);
    pub const TWO: Digit = Digit(2);
    pub const THREE: Digit = Digit(3);
    pub const FOUR: Digit = Digit(4);
    pub const FIVE: Digit = Digit(5);
    pub const SIX: Digit = Digit(6);
    pub const SEVEN: Digit = Digit(7);
    pub const EIGHT: Digit = Digit(8);
    pub const NINE: Digit = Digit(9);

    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError(value as u32))
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every key the on-screen keypad can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadInput {
    Digit(Digit),
    Backspace,
    Submit,
}

/// Digits the user is composing. Only ever holds ASCII decimal digits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    digits: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, digit: Digit) {
        self.digits.push(digit.as_char());
    }

    pub fn pop(&mut self) -> Option<Digit> {
        self.digits.pop().and_then(Digit::from_char)
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Parsed answer. Blank or overflowing input counts as zero.
    pub fn value(&self) -> u32 {
        self.digits.parse().unwrap_or(0)
    }

    pub fn as_display(&self) -> &str {
        if self.digits.is_empty() {
            BLANK_PLACEHOLDER
        } else {
            &self.digits
        }
    }
}
