use intmul_core::hex::digit_value;
use intmul_core::model::OperandPair;

use crate::diagnostics::{DiagnosticCode, InputDiagnostic, InputError, Operand};

/// Strip exactly one trailing `'\n'`, if present.
pub fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

/// Validate two raw input lines. Strict and fail-fast.
///
/// Rules, checked in this order:
/// - neither line may be empty after stripping one trailing newline
/// - both lines must have the same number of characters
/// - every character must be a hex digit (`0-9`, `a-f`, `A-F`)
///
/// Digit case is preserved.
pub fn validate_operands(raw_a: &str, raw_b: &str) -> Result<OperandPair, InputError> {
    let a = strip_newline(raw_a);
    let b = strip_newline(raw_b);

    for (operand, s) in [(Operand::A, a), (Operand::B, b)] {
        if s.is_empty() {
            return Err(InputError::single(
                InputDiagnostic::new(DiagnosticCode::EmptyInput, format!("operand {operand} is empty"))
                    .with_operand(operand),
            ));
        }
    }

    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    if a_len != b_len {
        return Err(InputError::single(InputDiagnostic::new(
            DiagnosticCode::LengthMismatch,
            format!("operands differ in length ({a_len} vs {b_len} digits)"),
        )));
    }

    for (operand, s) in [(Operand::A, a), (Operand::B, b)] {
        if let Some((i, c)) = s.chars().enumerate().find(|(_, c)| digit_value(*c).is_err()) {
            return Err(InputError::single(
                InputDiagnostic::new(
                    DiagnosticCode::InvalidCharacter,
                    format!("operand {operand} has invalid hex digit {c:?} at position {i}"),
                )
                .with_operand(operand)
                .with_position(i),
            ));
        }
    }

    OperandPair::new(a, b).map_err(|e| {
        InputError::single(InputDiagnostic::new(DiagnosticCode::InvalidCharacter, e.to_string()))
    })
}

/// Shape of the recursion for operands of a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    pub digits: usize,
    /// Number of split levels before single digits are reached.
    pub depth: u32,
    /// Concurrent units started over the whole computation.
    pub units: u64,
}

impl SplitPlan {
    /// Plan the recursion for operands of `digits` length.
    ///
    /// Odd lengths above one are rejected before any work starts, as is any
    /// length whose halves would become odd at a deeper level.
    pub fn for_len(digits: usize) -> Result<Self, InputError> {
        let mut len = digits;
        let mut depth = 0u32;
        while len > 1 {
            if len % 2 != 0 {
                let message = if len == digits {
                    format!("input is not even ({digits} digits)")
                } else {
                    format!("input of {digits} digits splits into odd halves of {len} digits")
                };
                return Err(InputError::single(InputDiagnostic::new(
                    DiagnosticCode::OddLength,
                    message,
                )));
            }
            len /= 2;
            depth += 1;
        }

        let units = (1..=depth).fold(0u64, |acc, level| {
            acc.saturating_add(4u64.saturating_pow(level))
        });
        log::debug!("split plan: {digits} digits, depth {depth}, {units} units");

        Ok(Self {
            digits,
            depth,
            units,
        })
    }
}

/// Check that operands of `digits` length halve evenly down to one digit.
pub fn validate_split_plan(digits: usize) -> Result<SplitPlan, InputError> {
    SplitPlan::for_len(digits)
}
