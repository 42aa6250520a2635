//! Names of target-language types the engine emits itself.

pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const BOOL: &str = "Bool";
pub const STRING: &str = "String";
pub const VOID: &str = "Void";
pub const DYNAMIC: &str = "Dynamic";
/// Generic sequence type every list-like source collection becomes.
pub const ARRAY: &str = "Array";
/// Generic linked list.
pub const LIST: &str = "List";
/// Binary buffer that replaces `byte[]`.
pub const BYTES: &str = "haxe.io.Bytes";
/// Generic nullable wrapper for non-primitive types.
pub const NULLABLE: &str = "Nullable";

/// Whether `expr` is one of the target's native value types.
///
/// Source value types that map to anything else have to be allocated as
/// references, since the target cannot declare value types.
pub fn is_native_value(expr: &str) -> bool {
    matches!(expr, INT | FLOAT | BOOL | STRING)
}

/// Dedicated nullable wrapper for a primitive (`Nullable_Int`), if `expr` is
/// one of the primitives that have one.
pub fn nullable_primitive(expr: &str) -> Option<String> {
    match expr {
        INT | FLOAT | BOOL => Some(format!("{NULLABLE}_{expr}")),
        _ => None,
    }
}

/// Literal a variable of type `expr` starts out with.
pub fn default_value(expr: &str) -> &'static str {
    match expr {
        INT | FLOAT => "0",
        BOOL => "false",
        _ => "null",
    }
}

/// `Array<Int>` → `Array`.
pub fn remove_generic_arguments(expr: &str) -> &str {
    match expr.find('<') {
        Some(i) => &expr[..i],
        None => expr,
    }
}

#[cfg(test)]
mod tests;
