use std::io::{BufRead, Write};

use intmul_core::hex::{HexError, multiply_digits};
use intmul_core::model::OperandPair;
use intmul_input::read_operands;

use crate::dispatch::run_four;
use crate::error::WorkerError;
use crate::spawner::Spawner;

/// Multiply an operand pair.
///
/// Single digits are multiplied directly. Longer operands must have an even
/// length; they are split into halves whose four products are computed by
/// units from `spawner` and recombined by shifted addition.
///
/// The result is not padded and may carry leading zeros.
pub fn multiply<S: Spawner + ?Sized>(pair: &OperandPair, spawner: &S) -> Result<String, WorkerError> {
    let n = pair.len();

    if n == 1 {
        let (Some(a), Some(b)) = (pair.a().chars().next(), pair.b().chars().next()) else {
            return Err(HexError::Empty.into());
        };
        return Ok(multiply_digits(a, b)?);
    }

    let tasks = pair.split()?;
    log::debug!("{} splitting {n}-digit operands", spawner.name());

    let partials = run_four(spawner, tasks)?;
    let product = partials.recombine(n)?;
    log::debug!("recombined {n}-digit operands into {} digits", product.len());

    Ok(product)
}

/// Unit entry point: read two operand lines from `input`, multiply, write one
/// result line to `output`.
pub fn serve<R, W, S>(mut input: R, mut output: W, spawner: &S) -> Result<(), WorkerError>
where
    R: BufRead,
    W: Write,
    S: Spawner + ?Sized,
{
    let pair = read_operands(&mut input)?;
    drop(input);

    let product = multiply(&pair, spawner)?;

    output
        .write_all(format!("{product}\n").as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| WorkerError::channel("write result", e))
}
