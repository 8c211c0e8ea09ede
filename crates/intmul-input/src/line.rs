use std::io::{self, BufRead};

use intmul_core::model::OperandPair;

use crate::diagnostics::{DiagnosticCode, InputDiagnostic, InputError, Operand};
use crate::validate::validate_operands;

const INITIAL_LINE_CAPACITY: usize = 64;

/// Read one line, trailing `'\n'` included, growing the buffer as needed.
///
/// Returns `Ok(None)` when the reader is already at end of input. A final line
/// without a newline is returned as-is. Non-UTF-8 bytes yield
/// [`io::ErrorKind::InvalidData`].
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::with_capacity(INITIAL_LINE_CAPACITY);
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Read the two operand lines and validate them.
///
/// A missing line counts as an empty one.
pub fn read_operands<R: BufRead + ?Sized>(reader: &mut R) -> Result<OperandPair, InputError> {
    let a = read_operand_line(reader, Operand::A)?;
    let b = read_operand_line(reader, Operand::B)?;
    validate_operands(&a, &b)
}

fn read_operand_line<R: BufRead + ?Sized>(
    reader: &mut R,
    operand: Operand,
) -> Result<String, InputError> {
    match read_line(reader) {
        Ok(line) => Ok(line.unwrap_or_default()),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(InputError::single(
            InputDiagnostic::new(
                DiagnosticCode::InvalidCharacter,
                format!("operand {operand} is not valid text"),
            )
            .with_operand(operand),
        )),
        Err(e) => Err(InputError::io(e)),
    }
}
