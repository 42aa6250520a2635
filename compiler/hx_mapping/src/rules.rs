//! Name-based parts of the built-in rule table.
//!
//! Structural rules (arrays, delegates, nullables, generic expansion) live in
//! the mapper because they recurse. What is here is pure lookup on names.

use hx_types::{NamedType, Shape, TypeArgs, TypeId, TypeTable};

use crate::target;
use crate::MappedType;

/// Fixed translation of built-ins and standard-library container shapes,
/// keyed by canonical name.
pub fn builtin_name(canonical: &str) -> Option<MappedType> {
    let expr = match canonical {
        "System.Void" => target::VOID,
        "System.Boolean" => target::BOOL,
        "System.Object" => target::DYNAMIC,
        "System.String" => target::STRING,

        "System.Int64" | "System.UInt64" | "System.Single" | "System.Double" => target::FLOAT,

        "System.Int32" | "System.UInt32" | "System.Byte" | "System.SByte" | "System.Int16"
        | "System.UInt16" | "System.Char" => target::INT,

        "System.Collections.Generic.List<>"
        | "System.Collections.Generic.IList<>"
        | "System.Collections.Generic.Queue<>"
        | "System.Collections.Generic.Stack<>"
        | "System.Collections.Generic.IEnumerable<>"
        | "System.Collections.Generic.ICollection<>"
        | "System.Collections.Generic.Dictionary<,>.ValueCollection"
        | "System.Collections.Generic.Dictionary<,>.KeyCollection"
        | "System.Linq.IOrderedEnumerable<>"
        | "System.Collections.IEnumerable"
        | "System.Collections.Specialized.NameObjectCollectionBase.KeysCollection" => {
            target::ARRAY
        }

        "System.Collections.Generic.LinkedList<>" => target::LIST,

        // the target has no untyped array; leave the annotation off and let
        // it infer
        "System.Array" => return Some(MappedType::Inferred),

        _ => return None,
    };
    Some(MappedType::expr(expr))
}

/// Nested view types that take their element type from one of their
/// container's arguments instead of declaring their own.
const KEYED_VIEWS: &[(&str, usize)] = &[("KeyCollection", 0), ("ValueCollection", 1)];

/// Arguments a bound generic is expanded with.
///
/// Usually the type's own arguments. A keyed view such as
/// `Dictionary<string, int>.KeyCollection` has none of its own and borrows
/// the matching container argument (`string`).
pub fn effective_type_arguments(table: &TypeTable, ty: TypeId) -> TypeArgs {
    let own = table.type_arguments(ty);
    let Some(named) = table.get(ty).named() else {
        return own.iter().copied().collect();
    };

    if let Some(container) = named.container {
        let borrowed = KEYED_VIEWS
            .iter()
            .find(|(view, _)| *view == named.name)
            .and_then(|&(_, position)| table.type_arguments(container).get(position));
        if let Some(&arg) = borrowed {
            return std::iter::once(arg).collect();
        }
    }

    own.iter().copied().collect()
}

/// Simple name and namespace a replacement rule or the default rule sees.
pub fn declared_name(table: &TypeTable, ty: TypeId) -> (String, &str) {
    match &table.get(ty).shape {
        Shape::Special(special) => (special.metadata_name().to_owned(), special.namespace()),
        Shape::Named(named) | Shape::Enum(named) | Shape::Delegate { named, .. } => {
            (type_name(table, named), named.namespace.as_str())
        }
        _ => (table.display(ty), ""),
    }
}

/// Target name of a declared type: nested types are flattened into
/// `Outer_Inner` because the target has no nested declarations.
pub fn type_name(table: &TypeTable, named: &NamedType) -> String {
    match named.container.and_then(|c| table.get(c).named()) {
        Some(outer) => format!("{}_{}", type_name(table, outer), named.name),
        None => named.name.clone(),
    }
}

/// Fallback for types nothing else matched: the namespace is lowercased
/// into a target package and the type name kept as declared.
pub fn default_name(namespace: &str, type_name: &str) -> String {
    if namespace.is_empty() {
        type_name.to_owned()
    } else {
        format!("{}.{type_name}", namespace.to_lowercase())
    }
}
