//! Source-language type descriptors.
//!
//! The front-end resolves every type occurrence in a program to a
//! [`TypeDescriptor`] and interns it into a [`TypeTable`]. The table hands out
//! [`TypeId`] handles; two occurrences of the same logical type always receive
//! the same handle, so downstream consumers can key caches on identity.
//!
//! # Shapes
//!
//! A descriptor's kind is the tagged union [`Shape`]:
//!
//! ```text
//! Special(int)                    System.Int32
//! Named(List<int>)                System.Collections.Generic.List<int>
//! Array(byte)                     byte[]
//! TypeParameter(T)                T
//! Delegate(Func<int>)             () -> int
//! Enum(Color)                     Drawing.Color
//! Anonymous { X: int }            <anonymous type: int X>
//! Nullable(int)                   int?
//! ```

mod descriptor;
mod format;
mod id;
mod special;
mod table;

pub use descriptor::{AnonymousMember, NamedType, Shape, TypeArgs, TypeDescriptor};
pub use id::TypeId;
pub use special::SpecialType;
pub use table::{TableError, TypeTable};
