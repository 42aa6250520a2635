//! Type handle.

use std::fmt;

/// Handle to an interned [`TypeDescriptor`](crate::TypeDescriptor).
///
/// Handles are only meaningful for the [`TypeTable`](crate::TypeTable) that
/// produced them. Equality of handles is identity of types.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Position in the owning table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}
