//! Override table and its JSON configuration.

use std::io::Read;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::rule::{ReplacementRule, Template, TypeOverride};
use crate::OverrideError;

/// Lookup of hand-written overrides by canonical source name.
pub trait OverrideLookup: Sync {
    fn lookup(&self, canonical_name: &str) -> Option<&TypeOverride>;
}

/// Immutable set of overrides, loaded once per process.
#[derive(Clone, Debug, Default)]
pub struct OverrideTable {
    entries: FxHashMap<String, TypeOverride>,
}

impl OverrideTable {
    /// A table with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON document.
    pub fn from_json(src: &str) -> Result<Self, OverrideError> {
        let file: OverrideFile = serde_json::from_str(src)?;
        Self::from_file(file)
    }

    /// Load from a JSON stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, OverrideError> {
        let file: OverrideFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    /// Build from already constructed overrides.
    pub fn from_overrides(
        overrides: impl IntoIterator<Item = TypeOverride>,
    ) -> Result<Self, OverrideError> {
        let mut table = Self::new();
        for entry in overrides {
            table.insert(entry)?;
        }
        Ok(table)
    }

    fn from_file(file: OverrideFile) -> Result<Self, OverrideError> {
        let mut table = Self::new();
        for raw in file.overrides {
            let rule = match raw.rule {
                RawRule::Rename { to } => ReplacementRule::Rename(to),
                RawRule::Template { template } => match Template::parse(&template) {
                    Ok(parsed) => ReplacementRule::Template(parsed),
                    Err(source) => {
                        return Err(OverrideError::Template {
                            ty: raw.canonical_name,
                            template,
                            source,
                        })
                    }
                },
            };
            table.insert(TypeOverride {
                canonical_name: raw.canonical_name,
                rule,
                skip_generic_args: raw.skip_generic_args,
            })?;
        }
        tracing::debug!(count = table.len(), "override table loaded");
        Ok(table)
    }

    fn insert(&mut self, entry: TypeOverride) -> Result<(), OverrideError> {
        if self.entries.contains_key(&entry.canonical_name) {
            return Err(OverrideError::Duplicate(entry.canonical_name));
        }
        self.entries.insert(entry.canonical_name.clone(), entry);
        Ok(())
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All overrides, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeOverride> {
        self.entries.values()
    }
}

impl OverrideLookup for OverrideTable {
    #[inline]
    fn lookup(&self, canonical_name: &str) -> Option<&TypeOverride> {
        self.entries.get(canonical_name)
    }
}

// On-disk shape

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    overrides: Vec<RawOverride>,
}

#[derive(Deserialize)]
struct RawOverride {
    #[serde(rename = "type")]
    canonical_name: String,
    #[serde(default)]
    skip_generic_args: bool,
    #[serde(flatten)]
    rule: RawRule,
}

#[derive(Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
enum RawRule {
    Rename { to: String },
    Template { template: String },
}
