//! Stack safety for recursive type mapping.
//!
//! Mapping a type recurses once per level of generic, array, nullable and
//! delegate nesting. Well-formed programs stay shallow, but descriptors built
//! by a misbehaving front-end can nest arbitrarily deep.
//! [`ensure_sufficient_stack`] grows the native stack on demand so such
//! nesting never overflows; the hard nesting limit is checked by the mapper
//! against each descriptor's recorded depth.
//!
//! # Usage
//!
//! ```text
//! fn map(&self, ty: TypeId) -> Result<String, MapError> {
//!     ensure_sufficient_stack(|| self.map(child))
//! }
//! ```

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// On native targets this grows the stack through `stacker` when less than
/// the red zone remains. WASM manages its own stack, so there it is a plain
/// call.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
