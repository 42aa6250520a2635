//! Mapping errors.
//!
//! Both variants abort translation of the current compilation unit. Output
//! already produced for that unit must be discarded by the caller.

use hx_types::TypeId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The front-end could not type a node that needs an explicit type.
    #[error("type could not be determined for {node}")]
    Unresolved { node: String },

    /// The requested type nests deeper than any well-formed program
    /// produces. `ty` is the type passed to the mapper.
    #[error("type nesting exceeds the limit of {limit} at {ty:?}")]
    DepthExceeded { limit: u32, ty: TypeId },
}
