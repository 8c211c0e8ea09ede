//! Recursive split-and-delegate multiplication of hex digit strings.
//!
//! Each split hands its four half-products to fresh concurrent units that
//! talk to their parent only through a byte channel: two operand lines in,
//! one product line out.

pub mod dispatch;
pub mod error;
pub mod pipe;
pub mod spawner;
pub mod telemetry;
pub mod worker;

pub use dispatch::run_four;
pub use error::WorkerError;
pub use spawner::{ProcessSpawner, Reap, Spawner, ThreadSpawner, UnitHandle};
pub use telemetry::MultiplyTelemetry;
pub use worker::{multiply, serve};
