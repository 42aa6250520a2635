//! Type mapping engine.
//!
//! Converts source type descriptors from a [`TypeTable`](hx_types::TypeTable)
//! into target-language type expressions:
//!
//! ```text
//! int                                   Int
//! byte[]                                haxe.io.Bytes
//! List<string>                          Array<String>
//! Dictionary<string, int>.KeyCollection Array<String>
//! int?                                  Nullable_Int
//! Func<int, string>                     (Int -> String)
//! MyApp.Models.Customer                 myapp.models.Customer
//! ```
//!
//! The entry point is [`TypeMapper`]. Results are memoized in a
//! [`ConversionCache`] owned by the translation run and shared by all its
//! threads.

mod anonymous;
mod cache;
mod canonical;
mod classify;
mod error;
mod frontend;
mod mapped;
mod mapper;
mod rules;
pub mod target;

pub use anonymous::{AnonymousTypeNamer, SynthesizedAnonymousNames};
pub use cache::ConversionCache;
pub use canonical::{canonical_name, canonical_name_opt};
pub use error::MapError;
pub use frontend::{Resolution, TypeResolver};
pub use mapped::MappedType;
pub use mapper::{MapperConfig, TypeMapper};
pub use rules::builtin_name;
pub use target::{default_value, remove_generic_arguments};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the engine's diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=hx_mapping=debug`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // an embedding application may already own the global subscriber
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
