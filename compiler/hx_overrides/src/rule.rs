//! Replacement rules.

use crate::TemplateError;

/// One hand-written translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeOverride {
    /// Canonical source name this override applies to.
    pub canonical_name: String,
    pub rule: ReplacementRule,
    /// Do not append target generic arguments even when the source type is a
    /// bound generic. Used when the replacement is not generic itself or
    /// already encodes its arguments.
    pub skip_generic_args: bool,
}

impl TypeOverride {
    /// Replace the type with a fixed target name.
    pub fn rename(canonical_name: impl Into<String>, to: impl Into<String>) -> Self {
        TypeOverride {
            canonical_name: canonical_name.into(),
            rule: ReplacementRule::Rename(to.into()),
            skip_generic_args: false,
        }
    }

    /// Replace the type by expanding a template.
    pub fn template(
        canonical_name: impl Into<String>,
        template: &str,
    ) -> Result<Self, TemplateError> {
        Ok(TypeOverride {
            canonical_name: canonical_name.into(),
            rule: ReplacementRule::Template(Template::parse(template)?),
            skip_generic_args: false,
        })
    }

    #[must_use]
    pub fn skipping_generic_args(mut self) -> Self {
        self.skip_generic_args = true;
        self
    }
}

/// How an override computes the target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplacementRule {
    Rename(String),
    Template(Template),
}

/// What a rule may depend on: the bound source type being replaced.
#[derive(Copy, Clone, Debug)]
pub struct ReplaceContext<'a> {
    /// Simple name of the source type.
    pub name: &'a str,
    /// Containing namespace, empty for the global namespace.
    pub namespace: &'a str,
    /// Target expressions of the bound type arguments.
    pub type_args: &'a [String],
    /// Written for an argument position the source type does not have.
    pub fallback: &'a str,
}

impl ReplacementRule {
    /// Whether [`apply`](Self::apply) reads the mapped type arguments.
    ///
    /// Lets the caller skip mapping arguments nobody will look at.
    pub fn uses_type_args(&self) -> bool {
        match self {
            ReplacementRule::Rename(_) => false,
            ReplacementRule::Template(template) => template
                .segments
                .iter()
                .any(|s| matches!(s, Segment::Args | Segment::Arg(_))),
        }
    }

    pub fn apply(&self, cx: &ReplaceContext<'_>) -> String {
        match self {
            ReplacementRule::Rename(to) => to.clone(),
            ReplacementRule::Template(template) => template.render(cx),
        }
    }
}

/// A parsed replacement template such as `{namespace_lower}.{name}<{0}>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// A piece of a [`Template`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// `{name}`
    Name,
    /// `{name_lower}`
    NameLower,
    /// `{namespace}`
    Namespace,
    /// `{namespace_lower}`
    NamespaceLower,
    /// `{args}`: all mapped arguments joined with `", "`.
    Args,
    /// `{N}`: the mapped argument at position N.
    Arg(usize),
}

impl Template {
    /// Parse placeholder syntax such as `haxe.ds.Map<{0}, {1}>`.
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = src;

        while !rest.is_empty() {
            match rest.find(['{', '}']) {
                None => {
                    segments.push(Segment::Literal(rest.to_owned()));
                    break;
                }
                Some(start) => {
                    if start > 0 {
                        segments.push(Segment::Literal(rest[..start].to_owned()));
                    }
                    if rest[start..].starts_with('}') {
                        return Err(TemplateError::Unbalanced);
                    }
                    let after = &rest[start + 1..];
                    let end = after.find('}').ok_or(TemplateError::Unbalanced)?;
                    let placeholder = &after[..end];
                    if placeholder.contains('{') {
                        return Err(TemplateError::Unbalanced);
                    }
                    segments.push(Segment::from_placeholder(placeholder)?);
                    rest = &after[end + 1..];
                }
            }
        }

        Ok(Template { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn render(&self, cx: &ReplaceContext<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Name => out.push_str(cx.name),
                Segment::NameLower => out.push_str(&cx.name.to_lowercase()),
                Segment::Namespace => out.push_str(cx.namespace),
                Segment::NamespaceLower => out.push_str(&cx.namespace.to_lowercase()),
                Segment::Args => out.push_str(&cx.type_args.join(", ")),
                Segment::Arg(index) => out.push_str(
                    cx.type_args
                        .get(*index)
                        .map_or(cx.fallback, String::as_str),
                ),
            }
        }
        out
    }
}

impl Segment {
    fn from_placeholder(placeholder: &str) -> Result<Self, TemplateError> {
        Ok(match placeholder {
            "name" => Segment::Name,
            "name_lower" => Segment::NameLower,
            "namespace" => Segment::Namespace,
            "namespace_lower" => Segment::NamespaceLower,
            "args" => Segment::Args,
            other => match other.parse::<usize>() {
                Ok(index) => Segment::Arg(index),
                Err(_) => return Err(TemplateError::UnknownPlaceholder(other.to_owned())),
            },
        })
    }
}
