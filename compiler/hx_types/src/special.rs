//! Language built-in types.

/// A type the source language treats as built-in.
///
/// Built-ins are the only types that can be spelled with a keyword (`int`,
/// `string`), which is why their canonical name is always the fully
/// qualified metadata name instead of the display form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SpecialType {
    Object,
    Void,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    IntPtr,
    DateTime,
    /// The untyped `System.Array` base class.
    Array,
    /// The non-generic `System.Collections.IEnumerable`.
    Enumerable,
}

impl SpecialType {
    pub const ALL: [SpecialType; 20] = [
        SpecialType::Object,
        SpecialType::Void,
        SpecialType::Boolean,
        SpecialType::Char,
        SpecialType::SByte,
        SpecialType::Byte,
        SpecialType::Int16,
        SpecialType::UInt16,
        SpecialType::Int32,
        SpecialType::UInt32,
        SpecialType::Int64,
        SpecialType::UInt64,
        SpecialType::Decimal,
        SpecialType::Single,
        SpecialType::Double,
        SpecialType::String,
        SpecialType::IntPtr,
        SpecialType::DateTime,
        SpecialType::Array,
        SpecialType::Enumerable,
    ];

    /// Containing namespace.
    pub const fn namespace(self) -> &'static str {
        match self {
            SpecialType::Enumerable => "System.Collections",
            _ => "System",
        }
    }

    /// Metadata name, never a keyword.
    pub const fn metadata_name(self) -> &'static str {
        match self {
            SpecialType::Object => "Object",
            SpecialType::Void => "Void",
            SpecialType::Boolean => "Boolean",
            SpecialType::Char => "Char",
            SpecialType::SByte => "SByte",
            SpecialType::Byte => "Byte",
            SpecialType::Int16 => "Int16",
            SpecialType::UInt16 => "UInt16",
            SpecialType::Int32 => "Int32",
            SpecialType::UInt32 => "UInt32",
            SpecialType::Int64 => "Int64",
            SpecialType::UInt64 => "UInt64",
            SpecialType::Decimal => "Decimal",
            SpecialType::Single => "Single",
            SpecialType::Double => "Double",
            SpecialType::String => "String",
            SpecialType::IntPtr => "IntPtr",
            SpecialType::DateTime => "DateTime",
            SpecialType::Array => "Array",
            SpecialType::Enumerable => "IEnumerable",
        }
    }

    /// Source-language shorthand, if the built-in has one.
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            SpecialType::Object => Some("object"),
            SpecialType::Void => Some("void"),
            SpecialType::Boolean => Some("bool"),
            SpecialType::Char => Some("char"),
            SpecialType::SByte => Some("sbyte"),
            SpecialType::Byte => Some("byte"),
            SpecialType::Int16 => Some("short"),
            SpecialType::UInt16 => Some("ushort"),
            SpecialType::Int32 => Some("int"),
            SpecialType::UInt32 => Some("uint"),
            SpecialType::Int64 => Some("long"),
            SpecialType::UInt64 => Some("ulong"),
            SpecialType::Decimal => Some("decimal"),
            SpecialType::Single => Some("float"),
            SpecialType::Double => Some("double"),
            SpecialType::String => Some("string"),
            SpecialType::IntPtr
            | SpecialType::DateTime
            | SpecialType::Array
            | SpecialType::Enumerable => None,
        }
    }

    /// Whether the built-in has value semantics in the source language.
    pub const fn is_value_type(self) -> bool {
        !matches!(
            self,
            SpecialType::Object
                | SpecialType::String
                | SpecialType::Array
                | SpecialType::Enumerable
        )
    }

    /// `System.Int32`, `System.Collections.IEnumerable`, ...
    pub fn qualified_name(self) -> String {
        format!("{}.{}", self.namespace(), self.metadata_name())
    }
}

#[cfg(test)]
mod tests;
