//! Translation overrides for specific source types.
//!
//! Some library types have no structural translation and are instead mapped
//! by hand. An [`OverrideTable`] holds those hand-written rules, keyed by the
//! canonical (generics-stripped, fully qualified) source type name.
//!
//! The table is loaded once from JSON configuration and is immutable
//! afterwards:
//!
//! ```json
//! {
//!   "overrides": [
//!     { "type": "System.Text.StringBuilder", "rule": "rename", "to": "StringBuf" },
//!     {
//!       "type": "System.Collections.Generic.HashSet<>",
//!       "rule": "template",
//!       "template": "haxe.ds.StringMap<{0}>",
//!       "skip_generic_args": true
//!     }
//!   ]
//! }
//! ```
//!
//! Consumers depend on the [`OverrideLookup`] trait rather than the concrete
//! table, so tests can supply their own rules.

mod error;
mod rule;
mod table;

pub use error::{OverrideError, TemplateError};
pub use rule::{ReplaceContext, ReplacementRule, Segment, Template, TypeOverride};
pub use table::{OverrideLookup, OverrideTable};
