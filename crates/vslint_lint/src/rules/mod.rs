//! The built-in rule implementations.

mod r1;
mod r2;
mod r3;
mod r4;

pub use r1::UnusedSignal;
pub use r2::AssignToReg;
pub use r3::AssignToWire;
pub use r4::UndefinedReference;

use crate::LintEngine;

/// Registers the four built-in rules in their fixed evaluation order:
/// R1, R2, R3, R4.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(UnusedSignal));
    engine.register(Box::new(AssignToReg));
    engine.register(Box::new(AssignToWire));
    engine.register(Box::new(UndefinedReference));
}
