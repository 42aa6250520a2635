//! Configuration errors. All of them are fatal at load time.

/// Problem in a replacement template.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown placeholder `{{{0}}}`")]
    UnknownPlaceholder(String),
    #[error("unbalanced braces")]
    Unbalanced,
}

/// Override configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    /// Invalid JSON, a missing field, or an unknown rule shape.
    #[error("malformed override configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate override for `{0}`")]
    Duplicate(String),

    #[error("override for `{ty}` has an invalid template `{template}`: {source}")]
    Template {
        ty: String,
        template: String,
        #[source]
        source: TemplateError,
    },
}
