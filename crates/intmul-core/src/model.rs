use core::fmt;
use std::ops::Index;

use crate::hex::{HexError, add_hex, is_hex_str, shift_left};

/// Two hex operands of equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandPair {
    a: String,
    b: String,
}

impl OperandPair {
    /// Checked constructor: both operands non-empty, equal length, hex only.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Result<Self, HexError> {
        let (a, b) = (a.into(), b.into());
        if a.is_empty() || b.is_empty() {
            return Err(HexError::Empty);
        }
        if a.len() != b.len() {
            return Err(HexError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        for s in [&a, &b] {
            if !is_hex_str(s) {
                let bad = s.chars().find(|c| !c.is_ascii_hexdigit()).unwrap_or('?');
                return Err(HexError::InvalidDigit(bad));
            }
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    /// Digit count of each operand.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Split both operands into halves and pair them up in [`Quadrant::ALL`] order.
    pub fn split(&self) -> Result<[OperandPair; 4], HexError> {
        let n = self.len();
        if n < 2 || n % 2 != 0 {
            return Err(HexError::OddLength(n));
        }
        let half = n / 2;
        let (ah, al) = self.a.split_at(half);
        let (bh, bl) = self.b.split_at(half);

        Ok(Quadrant::ALL.map(|q| {
            let (a, b) = match q {
                Quadrant::HighHigh => (ah, bh),
                Quadrant::HighLow => (ah, bl),
                Quadrant::LowHigh => (al, bh),
                Quadrant::LowLow => (al, bl),
            };
            OperandPair {
                a: a.to_string(),
                b: b.to_string(),
            }
        }))
    }
}

/// Which half-pair a partial product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `Ah * Bh`
    HighHigh,
    /// `Ah * Bl`
    HighLow,
    /// `Al * Bh`
    LowHigh,
    /// `Al * Bl`
    LowLow,
}

impl Quadrant {
    /// Dispatch and recombination order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighHigh,
        Quadrant::HighLow,
        Quadrant::LowHigh,
        Quadrant::LowLow,
    ];

    pub const fn index(self) -> usize {
        match self {
            Quadrant::HighHigh => 0,
            Quadrant::HighLow => 1,
            Quadrant::LowHigh => 2,
            Quadrant::LowLow => 3,
        }
    }

    /// Digit places this partial is shifted by when the parent operands have `len` digits.
    pub const fn shift(self, len: usize) -> usize {
        match self {
            Quadrant::HighHigh => len,
            Quadrant::HighLow | Quadrant::LowHigh => len / 2,
            Quadrant::LowLow => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Quadrant::HighHigh => "HH",
            Quadrant::HighLow => "HL",
            Quadrant::LowHigh => "LH",
            Quadrant::LowLow => "LL",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// The four partial products of one split, one slot per [`Quadrant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partials([String; 4]);

impl Partials {
    /// Slots are taken in [`Quadrant::ALL`] order.
    pub fn new(slots: [String; 4]) -> Self {
        Self(slots)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, &str)> {
        Quadrant::ALL.into_iter().map(move |q| (q, self[q].as_str()))
    }

    /// Sum the shifted partials of an operand pair with `len` digits:
    /// `(HH << len) + (HL << len/2) + (LH << len/2) + LL`.
    ///
    /// Partials are not trimmed; their leading zeros do not change the sum.
    pub fn recombine(&self, len: usize) -> Result<String, HexError> {
        let mut sum = shift_left(&self[Quadrant::HighHigh], Quadrant::HighHigh.shift(len));
        for (q, partial) in self.iter().skip(1) {
            sum = add_hex(&sum, &shift_left(partial, q.shift(len)))?;
        }
        Ok(sum)
    }
}

impl Index<Quadrant> for Partials {
    type Output = String;

    fn index(&self, q: Quadrant) -> &String {
        &self.0[q.index()]
    }
}
