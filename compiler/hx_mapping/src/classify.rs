//! Value/reference classification.
//!
//! The target has no user-defined value types. A source struct therefore
//! becomes a class, and code that copies it by value has to copy explicitly.
//! The only exceptions are the target's own value types.

use hx_types::TypeId;

use crate::{target, MapError, TypeMapper};

impl TypeMapper<'_> {
    /// Whether values of `ty` must be promoted to heap references.
    ///
    /// Reference types never need promotion. Value types need it unless
    /// they map to exactly `Int`, `Float`, `Bool` or `String`, including
    /// when they map to nothing at all.
    pub fn needs_reference_promotion(&self, ty: TypeId) -> Result<bool, MapError> {
        if !self.table().is_value_type(ty) {
            return Ok(false);
        }
        let mapped = self.map_type(ty)?;
        Ok(!mapped.as_expr().is_some_and(target::is_native_value))
    }
}
