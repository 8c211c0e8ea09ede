//! `intmul-io` is the single supported public entrypoint for recursive hex
//! multiplication: input validation, the worker units, and the top-level
//! driver that ties them together.
//!
//! This crate contains no argument parsing or logger setup. Those belong in the
//! binary.

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `intmul_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

use std::time::Instant;

use intmul_core::hex::pad_leading_zero;
use intmul_core::model::OperandPair;
use intmul_input::{SplitPlan, validate_operands};
use intmul_worker::{MultiplyTelemetry, Spawner, WorkerError, multiply};

#[doc(hidden)]
pub mod hex {
    pub use intmul_core::hex::{
        HexError, add_hex, digit_char, digit_value, is_hex_str, multiply_digits,
        pad_leading_zero, shift_left,
    };
}

#[doc(hidden)]
pub mod model {
    pub use intmul_core::model::{OperandPair, Partials, Quadrant};
}

#[doc(hidden)]
pub mod input {
    pub use intmul_input::{
        DiagnosticCode, InputDiagnostic, InputError, Operand, SplitPlan, read_line,
        read_operands, strip_newline, validate_operands, validate_split_plan,
    };
}

#[doc(hidden)]
pub mod worker {
    pub use intmul_worker::pipe::{PipeReader, PipeWriter, pipe};
    pub use intmul_worker::spawner::DEFAULT_UNIT_STACK_SIZE;
    pub use intmul_worker::{
        MultiplyTelemetry, ProcessSpawner, Reap, Spawner, ThreadSpawner, UnitHandle,
        WorkerError, multiply, run_four, serve,
    };
}

/// Convenience prelude for consumers.
pub mod prelude {
    pub use crate::input::{DiagnosticCode, InputError, read_operands};
    pub use crate::model::{OperandPair, Quadrant};
    pub use crate::worker::{
        MultiplyTelemetry, ProcessSpawner, Spawner, ThreadSpawner, WorkerError, serve,
    };
    pub use crate::{Product, format_diagnostic, multiply_lines, multiply_top_level};
}

/// A top-level product and the telemetry of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Lowercase hex digits, padded to an even count.
    pub digits: String,
    pub telemetry: MultiplyTelemetry,
}

/// Multiply validated operands at the top of the computation.
///
/// Rejects lengths that cannot be halved down to single digits before any unit
/// is started, then pads the product to an even digit count. Padding happens
/// here only, never inside the recursion. The split plan and the padding are
/// recorded in `telemetry`.
pub fn multiply_top_level<S: Spawner + ?Sized>(
    pair: &OperandPair,
    spawner: &S,
    telemetry: &mut MultiplyTelemetry,
) -> Result<String, WorkerError> {
    telemetry.record_operands(pair.len());
    let plan = SplitPlan::for_len(pair.len())?;
    telemetry.record_plan(&plan);
    log::info!(
        "multiplying {}-digit operands on {} units ({} backend)",
        plan.digits,
        plan.units,
        spawner.name()
    );

    let product = multiply(pair, spawner)?;
    let padded = pad_leading_zero(&product);
    telemetry.record_padding(padded.len() != product.len());
    Ok(padded)
}

/// Validate two raw input lines and multiply them.
pub fn multiply_lines<S: Spawner + ?Sized>(
    raw_a: &str,
    raw_b: &str,
    spawner: &S,
) -> Result<Product, WorkerError> {
    let started = Instant::now();
    let mut telemetry = MultiplyTelemetry::new(spawner.name());

    let result = validate_operands(raw_a, raw_b)
        .map_err(WorkerError::from)
        .and_then(|pair| multiply_top_level(&pair, spawner, &mut telemetry));
    telemetry.finish(&result, started.elapsed());

    Ok(Product {
        digits: result?,
        telemetry,
    })
}

/// Single-line diagnostic for the error channel: `[<program>]: <message>`.
pub fn format_diagnostic(program: &str, message: impl std::fmt::Display) -> String {
    let message = message.to_string();
    let first_line = message.lines().next().unwrap_or_default();
    format!("[{program}]: {first_line}")
}
