use avatara_core::Diagnostic;

use crate::avatar::Avatar;

/// The contract of the external text-to-IR compiler.
///
/// Implementations turn avatar description source text into the IR
/// consumed by the lowering engine. On failure they return the full
/// ordered diagnostic list rather than the first error.
pub trait AvatarCompiler {
    fn compile(&self, source: &str) -> Result<Avatar, Vec<Diagnostic>>;
}
