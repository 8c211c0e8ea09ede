use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable, machine-readable codes for input failures.
///
/// `message` stays human-oriented; tooling should match on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    EmptyInput,
    LengthMismatch,
    InvalidCharacter,
    /// Operand length is odd, or halves to an odd length before reaching one digit.
    OddLength,
    /// The input stream itself could not be read.
    Io,
}

impl DiagnosticCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::EmptyInput => "empty_input",
            DiagnosticCode::LengthMismatch => "length_mismatch",
            DiagnosticCode::InvalidCharacter => "invalid_character",
            DiagnosticCode::OddLength => "odd_length",
            DiagnosticCode::Io => "io",
        }
    }
}

/// Which input line a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

/// A single input diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDiagnostic {
    pub code: DiagnosticCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand: Option<Operand>,
    /// Zero-based character index of the offending digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub message: String,
}

impl InputDiagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            operand: None,
            position: None,
            message: message.into(),
        }
    }

    pub fn with_operand(mut self, operand: Operand) -> Self {
        self.operand = Some(operand);
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

/// Structured error for rejected input.
///
/// Validation is fail-fast and reports one diagnostic, but the container keeps
/// a list so the JSON shape stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputError {
    pub diagnostics: Vec<InputDiagnostic>,
}

impl InputError {
    pub fn single(diag: InputDiagnostic) -> Self {
        Self {
            diagnostics: vec![diag],
        }
    }

    pub fn io(err: std::io::Error) -> Self {
        Self::single(InputDiagnostic::new(
            DiagnosticCode::Io,
            format!("error reading input: {err}"),
        ))
    }

    /// Code of the first diagnostic.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.diagnostics.first().map(|d| d.code)
    }

    pub fn message(&self) -> String {
        self.diagnostics
            .first()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| "invalid input".to_string())
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InputError {}
