//! Interning table for type descriptors.

use rustc_hash::FxHashMap;

use crate::descriptor::{AnonymousMember, NamedType, Shape, TypeArgs, TypeDescriptor};
use crate::{SpecialType, TypeId};

/// Error raised while building descriptors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("`{ty}` is not a generic type definition")]
    NotGenericDefinition { ty: String },
    #[error("`{ty}` expects {expected} type argument(s), found {found}")]
    ArityMismatch {
        ty: String,
        expected: usize,
        found: usize,
    },
    #[error("`{ty}` cannot contain nested types")]
    NotAContainer { ty: String },
}

/// Owner of every descriptor in one compilation run.
///
/// Inserting a descriptor that is structurally equal to an existing one
/// returns the existing handle, so each logical type has exactly one
/// [`TypeId`].
///
/// Building requires `&mut self`; once built the table is only read and can
/// be shared across threads by reference.
#[derive(Default)]
pub struct TypeTable {
    types: Vec<TypeDescriptor>,
    /// Nesting depth per descriptor, parallel to `types`.
    depths: Vec<u32>,
    index: FxHashMap<TypeDescriptor, TypeId>,
}

impl TypeTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct descriptors.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Intern a descriptor, returning the existing handle if already present.
    pub fn intern(&mut self, descriptor: TypeDescriptor) -> TypeId {
        if let Some(&id) = self.index.get(&descriptor) {
            return id;
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "a compilation unit cannot hold 2^32 distinct types"
        )]
        let id = TypeId::new(self.types.len() as u32);
        let depth = descriptor
            .referenced()
            .iter()
            .map(|&child| self.depth(child) + 1)
            .max()
            .unwrap_or(0);
        self.depths.push(depth);
        self.types.push(descriptor.clone());
        self.index.insert(descriptor, id);
        id
    }

    /// Look up a descriptor.
    ///
    /// # Panics
    /// Panics if `id` was produced by a different table.
    #[inline]
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.index()]
    }

    /// How deeply a type nests: 0 for a type that refers to no other type,
    /// otherwise one more than the deepest type it refers to.
    ///
    /// Fixed when the type is interned, since handles can only refer to
    /// types interned before them.
    #[inline]
    pub fn depth(&self, id: TypeId) -> u32 {
        self.depths[id.index()]
    }

    /// Shorthand for `get(id).shape`.
    #[inline]
    pub fn shape(&self, id: TypeId) -> &Shape {
        &self.get(id).shape
    }

    #[inline]
    pub fn is_value_type(&self, id: TypeId) -> bool {
        self.get(id).is_value_type
    }

    /// Whether the type or any enclosing type is generic.
    pub fn is_generic(&self, id: TypeId) -> bool {
        let descriptor = self.get(id);
        if let Shape::Nullable { .. } = descriptor.shape {
            return true;
        }
        descriptor.named().is_some_and(|named| {
            named.arity > 0 || named.container.is_some_and(|c| self.is_generic(c))
        })
    }

    /// Generic, but with no arguments bound anywhere (`List<>`,
    /// `Dictionary<,>.KeyCollection`).
    pub fn is_unbound_generic(&self, id: TypeId) -> bool {
        match self.get(id).named() {
            Some(named) => !named.is_bound() && self.is_generic(id),
            None => false,
        }
    }

    /// The generic definition of a bound type.
    pub fn unbound_form(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).named().and_then(|named| named.definition)
    }

    /// The type's own bound arguments.
    pub fn type_arguments(&self, id: TypeId) -> &[TypeId] {
        match &self.get(id).shape {
            Shape::Nullable { inner } => std::slice::from_ref(inner),
            _ => self
                .get(id)
                .named()
                .map(|named| named.type_args.as_slice())
                .unwrap_or(&[]),
        }
    }

    // Construction

    /// A language built-in.
    pub fn special(&mut self, special: SpecialType) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Special(special),
            is_value_type: special.is_value_type(),
        })
    }

    /// A non-generic class (`is_value_type = false`) or struct.
    pub fn named(&mut self, namespace: &str, name: &str, is_value_type: bool) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Named(NamedType::top_level(namespace, name, 0)),
            is_value_type,
        })
    }

    /// A generic type definition such as `List<>`.
    pub fn generic(
        &mut self,
        namespace: &str,
        name: &str,
        arity: u16,
        is_value_type: bool,
    ) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Named(NamedType::top_level(namespace, name, arity)),
            is_value_type,
        })
    }

    /// A type declared inside `container`.
    ///
    /// When the container is a bound instantiation, the matching type nested
    /// in the container's definition is interned too and recorded as the
    /// unbound form.
    pub fn nested(
        &mut self,
        container: TypeId,
        name: &str,
        arity: u16,
        is_value_type: bool,
    ) -> Result<TypeId, TableError> {
        let (namespace, container_definition) = match &self.get(container).shape {
            Shape::Named(named) => (named.namespace.clone(), named.definition),
            _ => {
                return Err(TableError::NotAContainer {
                    ty: self.display(container),
                })
            }
        };

        let definition = match container_definition {
            Some(def) => Some(self.nested(def, name, arity, is_value_type)?),
            None => None,
        };

        Ok(self.intern(TypeDescriptor {
            shape: Shape::Named(NamedType {
                namespace,
                name: name.to_owned(),
                container: Some(container),
                arity,
                type_args: TypeArgs::new(),
                definition,
            }),
            is_value_type,
        }))
    }

    /// Bind a generic definition to concrete arguments.
    ///
    /// Binding the declared `System.Nullable<T>` yields the same type as
    /// [`nullable`](Self::nullable), so nullables have one descriptor no
    /// matter how the front-end spells them.
    pub fn instantiate(
        &mut self,
        definition: TypeId,
        args: impl IntoIterator<Item = TypeId>,
    ) -> Result<TypeId, TableError> {
        let args: TypeArgs = args.into_iter().collect();
        let descriptor = self.get(definition);
        let Shape::Named(named) = &descriptor.shape else {
            return Err(TableError::NotGenericDefinition {
                ty: self.display(definition),
            });
        };
        let named = self.bind(definition, named, args)?;
        let is_value_type = descriptor.is_value_type;

        if is_nullable_definition(&named) {
            if let [inner] = named.type_args.as_slice() {
                return Ok(self.nullable(*inner));
            }
        }

        Ok(self.intern(TypeDescriptor {
            shape: Shape::Named(named),
            is_value_type,
        }))
    }

    /// `element[]`.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Array { element },
            is_value_type: false,
        })
    }

    /// A generic placeholder such as `T`.
    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::TypeParameter {
                name: name.to_owned(),
            },
            is_value_type: false,
        })
    }

    /// An enum. Enums are always value types.
    pub fn enumeration(&mut self, namespace: &str, name: &str) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Enum(NamedType::top_level(namespace, name, 0)),
            is_value_type: true,
        })
    }

    /// `inner?`.
    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Nullable { inner },
            is_value_type: true,
        })
    }

    /// An anonymous record with the given members, in declaration order.
    pub fn anonymous<'n>(
        &mut self,
        members: impl IntoIterator<Item = (&'n str, TypeId)>,
    ) -> TypeId {
        let members = members
            .into_iter()
            .map(|(name, ty)| AnonymousMember {
                name: name.to_owned(),
                ty,
            })
            .collect();
        self.intern(TypeDescriptor {
            shape: Shape::Anonymous { members },
            is_value_type: false,
        })
    }

    /// A delegate type. For generic definitions, `params` and `ret` refer to
    /// the delegate's own type parameters.
    pub fn delegate(
        &mut self,
        namespace: &str,
        name: &str,
        arity: u16,
        params: impl IntoIterator<Item = TypeId>,
        ret: TypeId,
    ) -> TypeId {
        self.intern(TypeDescriptor {
            shape: Shape::Delegate {
                named: NamedType::top_level(namespace, name, arity),
                params: params.into_iter().collect(),
                ret,
            },
            is_value_type: false,
        })
    }

    /// Bind a generic delegate definition. The front-end supplies the
    /// substituted invoke signature.
    pub fn instantiate_delegate(
        &mut self,
        definition: TypeId,
        args: impl IntoIterator<Item = TypeId>,
        params: impl IntoIterator<Item = TypeId>,
        ret: TypeId,
    ) -> Result<TypeId, TableError> {
        let args: TypeArgs = args.into_iter().collect();
        let Shape::Delegate { named, .. } = &self.get(definition).shape else {
            return Err(TableError::NotGenericDefinition {
                ty: self.display(definition),
            });
        };
        let named = self.bind(definition, named, args)?;

        Ok(self.intern(TypeDescriptor {
            shape: Shape::Delegate {
                named,
                params: params.into_iter().collect(),
                ret,
            },
            is_value_type: false,
        }))
    }

    fn bind(
        &self,
        definition: TypeId,
        named: &NamedType,
        args: TypeArgs,
    ) -> Result<NamedType, TableError> {
        if named.arity == 0 || !named.type_args.is_empty() {
            return Err(TableError::NotGenericDefinition {
                ty: self.display(definition),
            });
        }
        if usize::from(named.arity) != args.len() {
            return Err(TableError::ArityMismatch {
                ty: self.display(definition),
                expected: usize::from(named.arity),
                found: args.len(),
            });
        }

        Ok(NamedType {
            type_args: args,
            // a definition nested in a bound container already knows its
            // fully unbound form
            definition: Some(named.definition.unwrap_or(definition)),
            ..named.clone()
        })
    }
}

/// `System.Nullable<>` declared as an ordinary generic struct.
fn is_nullable_definition(named: &NamedType) -> bool {
    named.container.is_none()
        && named.arity == 1
        && named.namespace == "System"
        && named.name == "Nullable"
}
