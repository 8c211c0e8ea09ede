pub mod diagnostics;
pub mod line;
pub mod validate;

pub use diagnostics::{DiagnosticCode, InputDiagnostic, InputError, Operand};
pub use line::{read_line, read_operands};
pub use validate::{SplitPlan, strip_newline, validate_operands, validate_split_plan};
