//! The type mapping engine.
//!
//! # Rule precedence
//!
//! First match wins:
//!
//! 1. anonymous types are named by the [`AnonymousTypeNamer`]
//! 2. `byte[]` becomes the binary buffer, other arrays `Array<T>`
//! 3. type parameters keep their name
//! 4. delegates become function types `(A -> B -> R)`
//! 5. enums become `Int`
//! 6. nullables become `Nullable_Int`/`_Float`/`_Bool` or `Nullable<T>`
//! 7. bound generics expand to `mapped(definition)<mapped(args)>` unless an
//!    override asks to skip argument formatting
//! 8. the fixed built-in name table
//! 9. the override table
//! 10. the lowercased-namespace default
//!
//! Nested types that cannot be mapped are written as the fallback
//! placeholder so the enclosing expression stays well formed.

use hx_overrides::{OverrideLookup, ReplaceContext, TypeOverride};
use hx_stack::ensure_sufficient_stack;
use hx_types::{Shape, SpecialType, TypeId, TypeTable};
use rayon::prelude::*;

use crate::anonymous::{AnonymousTypeNamer, SynthesizedAnonymousNames};
use crate::canonical::canonical_name;
use crate::{rules, target, ConversionCache, MapError, MappedType};

static DEFAULT_NAMER: SynthesizedAnonymousNames = SynthesizedAnonymousNames;

/// Engine settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapperConfig {
    /// Deepest descriptor nesting ([`TypeTable::depth`]) accepted; deeper
    /// types fail with [`MapError::DepthExceeded`].
    pub max_depth: u32,
    /// Written in place of nested types that have no mapping.
    pub fallback: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            max_depth: 256,
            fallback: target::DYNAMIC.to_owned(),
        }
    }
}

/// Maps source type descriptors to target type expressions.
///
/// A mapper borrows everything it works with: the run's descriptors, the
/// override table and the run's cache. It is `Sync`; translation tasks on
/// different threads may share one mapper, or build their own over the same
/// cache.
pub struct TypeMapper<'a> {
    table: &'a TypeTable,
    overrides: &'a dyn OverrideLookup,
    anonymous: &'a dyn AnonymousTypeNamer,
    cache: &'a ConversionCache,
    config: MapperConfig,
}

impl<'a> TypeMapper<'a> {
    /// A mapper with the default [`MapperConfig`] and anonymous namer.
    pub fn new(
        table: &'a TypeTable,
        overrides: &'a dyn OverrideLookup,
        cache: &'a ConversionCache,
    ) -> Self {
        TypeMapper {
            table,
            overrides,
            anonymous: &DEFAULT_NAMER,
            cache,
            config: MapperConfig::default(),
        }
    }

    /// Replace the default settings.
    #[must_use]
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the code generator's naming for anonymous types.
    #[must_use]
    pub fn with_anonymous_namer(mut self, namer: &'a dyn AnonymousTypeNamer) -> Self {
        self.anonymous = namer;
        self
    }

    /// The descriptors this mapper reads.
    #[inline]
    pub fn table(&self) -> &'a TypeTable {
        self.table
    }

    /// Active settings.
    #[inline]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map a type, consulting and filling the cache.
    ///
    /// The nesting limit is checked against the descriptor alone, so the
    /// outcome never depends on what the cache already holds. Everything a
    /// type refers to is shallower than the type itself, so nested lookups
    /// need no further check.
    pub fn map_type(&self, ty: TypeId) -> Result<MappedType, MapError> {
        let limit = self.config.max_depth;
        if self.table.depth(ty) > limit {
            return Err(MapError::DepthExceeded { limit, ty });
        }
        self.map_cached(ty)
    }

    /// Map a type to an expression; `None` when no type should be written.
    pub fn map_expr(&self, ty: TypeId) -> Result<Option<String>, MapError> {
        Ok(self.map_type(ty)?.into_expr())
    }

    /// Declaration-site annotation: `": T"`, or empty when the target should
    /// infer the type.
    pub fn annotation(&self, ty: TypeId) -> Result<String, MapError> {
        Ok(self
            .map_expr(ty)?
            .map(|expr| format!(": {expr}"))
            .unwrap_or_default())
    }

    /// Map many types on the rayon pool. Results are in input order.
    pub fn map_all(&self, types: &[TypeId]) -> Vec<Result<MappedType, MapError>> {
        types.par_iter().map(|&ty| self.map_type(ty)).collect()
    }

    fn map_cached(&self, ty: TypeId) -> Result<MappedType, MapError> {
        self.cache.get_or_compute(ty, || {
            let mapped = self.map_uncached(ty)?;
            tracing::debug!(?ty, ?mapped, "cache miss");
            Ok(mapped)
        })
    }

    fn map_nested(&self, ty: TypeId) -> Result<MappedType, MapError> {
        ensure_sufficient_stack(|| self.map_cached(ty))
    }

    /// Map a nested type, writing the fallback when it has no mapping.
    fn map_or_fallback(&self, ty: TypeId) -> Result<String, MapError> {
        Ok(self
            .map_nested(ty)?
            .into_expr()
            .unwrap_or_else(|| self.config.fallback.clone()))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn map_uncached(&self, ty: TypeId) -> Result<MappedType, MapError> {
        match &self.table.get(ty).shape {
            Shape::Anonymous { members } => Ok(MappedType::Expr(
                self.anonymous.type_name(self.table, ty, members),
            )),
            Shape::Array { element } => self.map_array(*element),
            Shape::TypeParameter { name } => Ok(MappedType::expr(name.as_str())),
            Shape::Delegate { params, ret, .. } => self.map_delegate(params, *ret),
            Shape::Enum(_) => Ok(MappedType::expr(target::INT)),
            Shape::Nullable { inner } => self.map_nullable(*inner),
            Shape::Special(_) | Shape::Named(_) => self.map_named(ty),
        }
    }

    fn map_array(&self, element: TypeId) -> Result<MappedType, MapError> {
        if self.table.get(element).special() == Some(SpecialType::Byte) {
            return Ok(MappedType::expr(target::BYTES));
        }
        let element = self.map_or_fallback(element)?;
        Ok(MappedType::Expr(format!("{}<{element}>", target::ARRAY)))
    }

    fn map_delegate(
        &self,
        params: &[TypeId],
        ret: TypeId,
    ) -> Result<MappedType, MapError> {
        let mut expr = String::from("(");
        if params.is_empty() {
            expr.push_str(target::VOID);
            expr.push_str(" -> ");
        }
        for &param in params {
            expr.push_str(&self.map_or_fallback(param)?);
            expr.push_str(" -> ");
        }
        expr.push_str(&self.map_or_fallback(ret)?);
        expr.push(')');
        Ok(MappedType::Expr(expr))
    }

    fn map_nullable(&self, inner: TypeId) -> Result<MappedType, MapError> {
        let inner = self.map_or_fallback(inner)?;
        Ok(MappedType::Expr(match target::nullable_primitive(&inner) {
            Some(primitive) => primitive,
            None => format!("{}<{inner}>", target::NULLABLE),
        }))
    }

    /// Rules 7 to 10, for built-ins and declared types.
    fn map_named(&self, ty: TypeId) -> Result<MappedType, MapError> {
        let canonical = canonical_name(self.table, ty);
        let entry = self.overrides.lookup(&canonical);

        if !entry.is_some_and(|o| o.skip_generic_args)
            && self.table.is_generic(ty)
            && !self.table.is_unbound_generic(ty)
        {
            let args = rules::effective_type_arguments(self.table, ty);
            match self.table.unbound_form(ty) {
                Some(unbound) if !args.is_empty() => {
                    return self.map_generic(unbound, &args);
                }
                _ => {}
            }
        }

        if let Some(builtin) = rules::builtin_name(&canonical) {
            return Ok(builtin);
        }

        if let Some(entry) = entry {
            return self.apply_override(ty, entry);
        }

        let (type_name, namespace) = rules::declared_name(self.table, ty);
        Ok(MappedType::Expr(rules::default_name(namespace, &type_name)))
    }

    fn map_generic(
        &self,
        unbound: TypeId,
        args: &[TypeId],
    ) -> Result<MappedType, MapError> {
        let mut expr = self
            .map_nested(unbound)?
            .into_expr()
            .unwrap_or_else(|| self.config.fallback.clone());
        expr.push('<');
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                expr.push_str(", ");
            }
            expr.push_str(&self.map_or_fallback(arg)?);
        }
        expr.push('>');
        Ok(MappedType::Expr(expr))
    }

    fn apply_override(
        &self,
        ty: TypeId,
        entry: &TypeOverride,
    ) -> Result<MappedType, MapError> {
        let type_args = if entry.rule.uses_type_args() {
            rules::effective_type_arguments(self.table, ty)
                .into_iter()
                .map(|arg| self.map_or_fallback(arg))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };
        let (name, namespace) = rules::declared_name(self.table, ty);

        tracing::debug!(canonical = %entry.canonical_name, "applying type override");
        Ok(MappedType::Expr(entry.rule.apply(&ReplaceContext {
            name: &name,
            namespace,
            type_args: &type_args,
            fallback: &self.config.fallback,
        })))
    }
}
