use std::time::Duration;

use intmul_input::SplitPlan;
use serde::{Deserialize, Serialize};

use crate::error::WorkerError;

/// Machine-readable summary of one top-level multiplication.
///
/// `depth` and `units` come from the split plan, not from counting, so they
/// are identical across runs and backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplyTelemetry {
    /// Always "multiply".
    pub op: String,

    pub ok: bool,

    /// Backend that ran the units, e.g. "thread" or "process".
    pub backend: String,

    /// Digits per operand (0 when input was rejected before reading both lines).
    pub digits: usize,

    /// Split levels below the top-level call.
    pub depth: u32,

    /// Concurrent units started.
    pub units: u64,

    /// Digit count of the emitted product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_digits: Option<usize>,

    /// True when a leading zero was added to reach an even digit count.
    pub padded: bool,

    /// Elapsed time (milliseconds).
    pub elapsed_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl MultiplyTelemetry {
    pub fn new(backend: &str) -> Self {
        Self {
            op: "multiply".to_string(),
            ok: false,
            backend: backend.to_string(),
            digits: 0,
            depth: 0,
            units: 0,
            product_digits: None,
            padded: false,
            elapsed_ms: 0,
            error_code: None,
        }
    }

    pub fn record_operands(&mut self, digits: usize) {
        self.digits = digits;
    }

    pub fn record_plan(&mut self, plan: &SplitPlan) {
        self.digits = plan.digits;
        self.depth = plan.depth;
        self.units = plan.units;
    }

    pub fn record_padding(&mut self, padded: bool) {
        self.padded = padded;
    }

    pub fn finish(&mut self, result: &Result<String, WorkerError>, elapsed: Duration) {
        self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match result {
            Ok(product) => {
                self.ok = true;
                self.product_digits = Some(product.len());
                self.error_code = None;
            }
            Err(e) => {
                self.ok = false;
                self.product_digits = None;
                self.padded = false;
                self.error_code = Some(e.code().to_string());
            }
        }
    }
}
