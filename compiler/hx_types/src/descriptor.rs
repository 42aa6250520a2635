//! Descriptor data model.

use smallvec::SmallVec;

use crate::{SpecialType, TypeId};

/// Type arguments or delegate parameters. Almost always short.
pub type TypeArgs = SmallVec<[TypeId; 4]>;

/// A fully resolved source type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub shape: Shape,
    /// Whether the source language gives this type value semantics.
    pub is_value_type: bool,
}

/// What kind of type a descriptor describes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Language built-in (`int`, `string`, `System.Array`, ...).
    Special(SpecialType),
    /// Class, struct or interface.
    Named(NamedType),
    /// Single-dimensional array.
    Array { element: TypeId },
    /// Generic placeholder such as `T`.
    TypeParameter { name: String },
    /// Delegate type with its invoke signature already substituted.
    Delegate {
        named: NamedType,
        params: TypeArgs,
        ret: TypeId,
    },
    Enum(NamedType),
    /// Compiler-synthesized anonymous record.
    Anonymous { members: Vec<AnonymousMember> },
    /// `Nullable<T>` over exactly one wrapped type.
    Nullable { inner: TypeId },
}

/// A declared (non-built-in) type name with its generic state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// Containing namespace, empty for the global namespace.
    pub namespace: String,
    /// Simple name without arity suffix.
    pub name: String,
    /// Enclosing type for nested types.
    pub container: Option<TypeId>,
    /// Number of the type's own type parameters.
    pub arity: u16,
    /// Bound arguments; empty for definitions and non-generic types.
    pub type_args: TypeArgs,
    /// Unbound form, present when this type or its container is bound.
    pub definition: Option<TypeId>,
}

impl NamedType {
    pub(crate) fn top_level(namespace: &str, name: &str, arity: u16) -> Self {
        NamedType {
            namespace: namespace.to_owned(),
            name: name.to_owned(),
            container: None,
            arity,
            type_args: TypeArgs::new(),
            definition: None,
        }
    }

    fn push_referenced(&self, refs: &mut TypeArgs) {
        refs.extend(self.type_args.iter().copied());
        refs.extend(self.container);
        refs.extend(self.definition);
    }

    /// Whether this is a bound instantiation (or nested in one).
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.definition.is_some()
    }
}

/// One property of an anonymous type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnonymousMember {
    pub name: String,
    pub ty: TypeId,
}

impl TypeDescriptor {
    /// The declared name of named, enum and delegate types.
    pub fn named(&self) -> Option<&NamedType> {
        match &self.shape {
            Shape::Named(named) | Shape::Enum(named) | Shape::Delegate { named, .. } => {
                Some(named)
            }
            Shape::Special(_)
            | Shape::Array { .. }
            | Shape::TypeParameter { .. }
            | Shape::Anonymous { .. }
            | Shape::Nullable { .. } => None,
        }
    }

    /// Every type this descriptor refers to directly: elements, arguments,
    /// containers, definitions, signature and member types.
    pub fn referenced(&self) -> TypeArgs {
        let mut refs = TypeArgs::new();
        match &self.shape {
            Shape::Special(_) | Shape::TypeParameter { .. } => {}
            Shape::Named(named) | Shape::Enum(named) => named.push_referenced(&mut refs),
            Shape::Array { element } => refs.push(*element),
            Shape::Delegate { named, params, ret } => {
                named.push_referenced(&mut refs);
                refs.extend(params.iter().copied());
                refs.push(*ret);
            }
            Shape::Anonymous { members } => refs.extend(members.iter().map(|m| m.ty)),
            Shape::Nullable { inner } => refs.push(*inner),
        }
        refs
    }

    /// The built-in this descriptor denotes, if any.
    pub fn special(&self) -> Option<SpecialType> {
        match self.shape {
            Shape::Special(special) => Some(special),
            _ => None,
        }
    }
}
