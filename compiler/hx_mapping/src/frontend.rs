//! Mapping syntax nodes through the front-end's type information.

use std::fmt;

use hx_types::TypeId;

use crate::{MapError, TypeMapper};

/// Outcome of asking the front-end for a node's type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved(TypeId),
    /// The front-end produced an error type for the node.
    Error,
    /// The front-end has no type for the node.
    Unknown,
}

/// Semantic model of the front-end, as far as type mapping needs it.
pub trait TypeResolver {
    /// Syntax node handle. Its display form is used in error messages.
    type Node: fmt::Display;

    fn resolve_type(&self, node: &Self::Node) -> Resolution;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// Type of `node`. When the front-end fails on the node itself, its parent
/// often carries the type (a type name inside an expression, for instance),
/// so the parent is asked once.
fn resolve_with_retry<R: TypeResolver>(resolver: &R, node: &R::Node) -> Option<TypeId> {
    let resolution = match resolver.resolve_type(node) {
        Resolution::Error => match resolver.parent(node) {
            Some(parent) => {
                tracing::trace!(%node, "error type, retrying with parent");
                resolver.resolve_type(&parent)
            }
            None => Resolution::Error,
        },
        other => other,
    };
    match resolution {
        Resolution::Resolved(ty) => Some(ty),
        Resolution::Error | Resolution::Unknown => None,
    }
}

impl TypeMapper<'_> {
    /// Target type of a node, or `None` when the node has no determinable
    /// type or its type should be inferred.
    pub fn try_convert_node<R: TypeResolver>(
        &self,
        resolver: &R,
        node: &R::Node,
    ) -> Result<Option<String>, MapError> {
        match resolve_with_retry(resolver, node) {
            Some(ty) => self.map_expr(ty),
            None => Ok(None),
        }
    }

    /// Like [`try_convert_node`](Self::try_convert_node), for callers that
    /// must write a type.
    pub fn convert_node<R: TypeResolver>(
        &self,
        resolver: &R,
        node: &R::Node,
    ) -> Result<String, MapError> {
        self.try_convert_node(resolver, node)?
            .ok_or_else(|| MapError::Unresolved {
                node: format!("node {node}"),
            })
    }

    /// `": T"` for the node's type, or empty.
    pub fn annotation_for_node<R: TypeResolver>(
        &self,
        resolver: &R,
        node: &R::Node,
    ) -> Result<String, MapError> {
        Ok(self
            .try_convert_node(resolver, node)?
            .map(|expr| format!(": {expr}"))
            .unwrap_or_default())
    }
}
