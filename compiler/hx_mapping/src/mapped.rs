//! Engine output.

/// A target-language type expression, or the decision to write none.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MappedType {
    Expr(String),
    /// No explicit type should be written; the target infers it. Produced
    /// for source forms with no target spelling, such as the untyped
    /// `System.Array`.
    Inferred,
}

impl MappedType {
    /// An explicit expression.
    #[inline]
    pub fn expr(expr: impl Into<String>) -> Self {
        MappedType::Expr(expr.into())
    }

    /// The expression, if one should be written.
    #[inline]
    pub fn as_expr(&self) -> Option<&str> {
        match self {
            MappedType::Expr(expr) => Some(expr),
            MappedType::Inferred => None,
        }
    }

    /// Owned form of [`as_expr`](Self::as_expr).
    #[inline]
    pub fn into_expr(self) -> Option<String> {
        match self {
            MappedType::Expr(expr) => Some(expr),
            MappedType::Inferred => None,
        }
    }

    /// `true` when no type annotation should be written.
    #[inline]
    pub fn is_inferred(&self) -> bool {
        matches!(self, MappedType::Inferred)
    }
}
