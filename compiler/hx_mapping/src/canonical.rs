//! Canonical names: the key for overrides and the built-in name table.
//!
//! A canonical name identifies a type family independent of bound
//! arguments:
//!
//! ```text
//! int                                   System.Int32
//! List<int>                             System.Collections.Generic.List<>
//! Dictionary<string, int>.KeyCollection System.Collections.Generic.Dictionary<,>.KeyCollection
//! List<int>[]                           System.Collections.Generic.List<>[]
//! int?                                  System.Nullable<>
//! ```
//!
//! Built-ins are always spelled by metadata name so the override table and
//! the name table see exactly one spelling per primitive.

use hx_stack::ensure_sufficient_stack;
use hx_types::{Shape, TypeId, TypeTable};

/// Canonical name of `ty`.
pub fn canonical_name(table: &TypeTable, ty: TypeId) -> String {
    match &table.get(ty).shape {
        Shape::Array { element } => {
            let mut name = ensure_sufficient_stack(|| canonical_name(table, *element));
            name.push_str("[]");
            name
        }
        Shape::Special(special) => special.qualified_name(),
        Shape::Nullable { .. } => "System.Nullable<>".to_owned(),
        _ if table.is_generic(ty) && !table.is_unbound_generic(ty) => {
            match table.unbound_form(ty) {
                Some(unbound) => canonical_name(table, unbound),
                None => table.display(ty),
            }
        }
        _ => table.display(ty),
    }
}

/// [`canonical_name`] over an optional type; absence propagates.
pub fn canonical_name_opt(table: &TypeTable, ty: Option<TypeId>) -> Option<String> {
    ty.map(|ty| canonical_name(table, ty))
}
