#![doc = r#"
INTERNAL CRATE – NOT A STABLE API

Hex digit-string arithmetic and the operand model shared by the `intmul`
crates.

Do NOT depend on this crate directly.
Use `intmul-io` instead.
"#]

pub mod hex;
pub mod model;
