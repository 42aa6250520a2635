//! Memoization of mapped types.
//!
//! One cache belongs to one translation run and is handed to every
//! [`TypeMapper`](crate::TypeMapper) of that run. Keys are [`TypeId`]s, which
//! are only meaningful within the run's [`TypeTable`](hx_types::TypeTable),
//! so a cache must never outlive its table; drop it or call
//! [`clear`](ConversionCache::clear) before the next run.

use dashmap::DashMap;
use hx_types::TypeId;
use rustc_hash::FxBuildHasher;

use crate::MappedType;

/// Concurrent `TypeId -> MappedType` map.
///
/// No lock is held while a value is computed: mapping recurses into the
/// cache for nested types, and two threads missing on the same key simply
/// compute the same value twice. The later insert wins, which is harmless
/// because mapping is pure.
#[derive(Default)]
pub struct ConversionCache {
    entries: DashMap<TypeId, MappedType, FxBuildHasher>,
}

impl ConversionCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached mapping of `ty`, if any.
    #[inline]
    pub fn get(&self, ty: TypeId) -> Option<MappedType> {
        self.entries.get(&ty).map(|entry| entry.value().clone())
    }

    /// Store a mapping, replacing any earlier one.
    #[inline]
    pub fn insert(&self, ty: TypeId, mapped: MappedType) {
        self.entries.insert(ty, mapped);
    }

    /// Return the cached value, or compute, insert and return it.
    ///
    /// Failures are returned as-is and never cached.
    pub fn get_or_compute<E>(
        &self,
        ty: TypeId,
        compute: impl FnOnce() -> Result<MappedType, E>,
    ) -> Result<MappedType, E> {
        if let Some(hit) = self.get(ty) {
            return Ok(hit);
        }

        let mapped = compute()?;
        self.insert(ty, mapped.clone());
        Ok(mapped)
    }

    /// Number of cached types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything, e.g. between independent runs.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
