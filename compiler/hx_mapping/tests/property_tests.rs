//! Property-based tests for the type mapping engine.
//!
//! Random type shapes are built into a fresh table and checked for:
//! 1. Determinism: two independent mappers agree
//! 2. Cache transparency: a warm cache never changes a result
//! 3. Canonical stability: canonical names ignore bound arguments
//! 4. Structural rules: arrays, nullables and generics compose as documented

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use hx_mapping::{canonical_name, ConversionCache, MapError, MappedType, TypeMapper};
use hx_overrides::OverrideTable;
use hx_types::{SpecialType, TypeId, TypeTable};
use proptest::prelude::*;

const GENERIC: &str = "System.Collections.Generic";

// -- Type Generation Strategies --

/// A type to build, independent of any table.
#[derive(Clone, Debug)]
enum Recipe {
    Special(SpecialType),
    Declared { namespace: String, name: String, value: bool },
    Param(String),
    Enum(String),
    Array(Box<Recipe>),
    List(Box<Recipe>),
    Dict(Box<Recipe>, Box<Recipe>),
    Keys(Box<Recipe>, Box<Recipe>),
    Nullable(SpecialType),
    Func(Vec<Recipe>, Box<Recipe>),
}

fn special_strategy() -> impl Strategy<Value = SpecialType> {
    prop::sample::select(SpecialType::ALL.to_vec())
}

fn value_special_strategy() -> impl Strategy<Value = SpecialType> {
    special_strategy().prop_filter("value type", |s| s.is_value_type())
}

fn leaf_strategy() -> impl Strategy<Value = Recipe> {
    prop_oneof![
        special_strategy().prop_map(Recipe::Special),
        (
            prop::string::string_regex("[A-Z][a-z]{0,6}(\\.[A-Z][a-z]{0,6}){0,2}")
                .expect("valid regex"),
            prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}").expect("valid regex"),
            any::<bool>(),
        )
            .prop_map(|(namespace, name, value)| Recipe::Declared { namespace, name, value }),
        prop::string::string_regex("T[A-Z]?[a-z]{0,5}")
            .expect("valid regex")
            .prop_map(Recipe::Param),
        prop::string::string_regex("[A-Z][a-z]{0,8}")
            .expect("valid regex")
            .prop_map(Recipe::Enum),
        value_special_strategy().prop_map(Recipe::Nullable),
    ]
}

fn recipe_strategy(depth: u32) -> BoxedStrategy<Recipe> {
    if depth == 0 {
        leaf_strategy().boxed()
    } else {
        let inner = || recipe_strategy(depth - 1);
        prop_oneof![
            leaf_strategy(),
            inner().prop_map(|r| Recipe::Array(Box::new(r))),
            inner().prop_map(|r| Recipe::List(Box::new(r))),
            (inner(), inner()).prop_map(|(k, v)| Recipe::Dict(Box::new(k), Box::new(v))),
            (inner(), inner()).prop_map(|(k, v)| Recipe::Keys(Box::new(k), Box::new(v))),
            (prop::collection::vec(inner(), 0..4), inner())
                .prop_map(|(params, ret)| Recipe::Func(params, Box::new(ret))),
        ]
        .boxed()
    }
}

fn build(table: &mut TypeTable, recipe: &Recipe) -> TypeId {
    match recipe {
        Recipe::Special(special) => table.special(*special),
        Recipe::Declared { namespace, name, value } => table.named(namespace, name, *value),
        Recipe::Param(name) => table.type_parameter(name),
        Recipe::Enum(name) => table.enumeration("Generated", name),
        Recipe::Array(element) => {
            let element = build(table, element);
            table.array(element)
        }
        Recipe::List(element) => {
            let element = build(table, element);
            let list = table.generic(GENERIC, "List", 1, false);
            table.instantiate(list, [element]).unwrap()
        }
        Recipe::Dict(key, value) => {
            let (key, value) = (build(table, key), build(table, value));
            let dict = table.generic(GENERIC, "Dictionary", 2, false);
            table.instantiate(dict, [key, value]).unwrap()
        }
        Recipe::Keys(key, value) => {
            let (key, value) = (build(table, key), build(table, value));
            let dict = table.generic(GENERIC, "Dictionary", 2, false);
            let bound = table.instantiate(dict, [key, value]).unwrap();
            table.nested(bound, "KeyCollection", 0, false).unwrap()
        }
        Recipe::Nullable(special) => {
            let inner = table.special(*special);
            table.nullable(inner)
        }
        Recipe::Func(params, ret) => {
            let params: Vec<_> = params.iter().map(|p| build(table, p)).collect();
            let ret = build(table, ret);
            table.delegate("Generated", "Callback", 0, params, ret)
        }
    }
}

fn map_fresh(table: &TypeTable, ty: TypeId) -> MappedType {
    let overrides = OverrideTable::new();
    let cache = ConversionCache::new();
    TypeMapper::new(table, &overrides, &cache).map_type(ty).unwrap()
}

fn expr_or_dynamic(mapped: MappedType) -> String {
    mapped.into_expr().unwrap_or_else(|| "Dynamic".to_owned())
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Independent mappers over the same table agree.
    #[test]
    fn prop_mapping_is_deterministic(recipe in recipe_strategy(3)) {
        let mut table = TypeTable::new();
        let ty = build(&mut table, &recipe);
        prop_assert_eq!(map_fresh(&table, ty), map_fresh(&table, ty));
    }

    /// Mapping other types first, or the same type again, does not change
    /// the result.
    #[test]
    fn prop_cache_is_transparent(
        recipes in prop::collection::vec(recipe_strategy(3), 1..6),
    ) {
        let mut table = TypeTable::new();
        let types: Vec<_> = recipes.iter().map(|r| build(&mut table, r)).collect();

        let overrides = OverrideTable::new();
        let cache = ConversionCache::new();
        let mapper = TypeMapper::new(&table, &overrides, &cache);
        for &ty in types.iter().rev() {
            mapper.map_type(ty).unwrap();
        }
        for &ty in &types {
            prop_assert_eq!(mapper.map_type(ty).unwrap(), map_fresh(&table, ty));
        }
    }

    /// Parallel batch mapping agrees with one-at-a-time mapping.
    #[test]
    fn prop_map_all_matches_map_type(
        recipes in prop::collection::vec(recipe_strategy(2), 0..8),
    ) {
        let mut table = TypeTable::new();
        let types: Vec<_> = recipes.iter().map(|r| build(&mut table, r)).collect();

        let overrides = OverrideTable::new();
        let cache = ConversionCache::new();
        let batch = TypeMapper::new(&table, &overrides, &cache).map_all(&types);
        let single: Vec<Result<_, MapError>> =
            types.iter().map(|&ty| Ok(map_fresh(&table, ty))).collect();
        prop_assert_eq!(batch, single);
    }

    /// Canonical names of a generic family do not depend on its arguments.
    #[test]
    fn prop_canonical_ignores_arguments(
        a in recipe_strategy(2),
        b in recipe_strategy(2),
    ) {
        let mut table = TypeTable::new();
        let list_a = build(&mut table, &Recipe::List(Box::new(a.clone())));
        let list_b = build(&mut table, &Recipe::List(Box::new(b.clone())));
        let keys_ab = build(&mut table, &Recipe::Keys(Box::new(a.clone()), Box::new(b.clone())));
        let keys_ba = build(&mut table, &Recipe::Keys(Box::new(b), Box::new(a)));

        prop_assert_eq!(canonical_name(&table, list_a), canonical_name(&table, list_b));
        prop_assert_eq!(
            canonical_name(&table, keys_ab),
            "System.Collections.Generic.Dictionary<,>.KeyCollection"
        );
        prop_assert_eq!(canonical_name(&table, keys_ba), canonical_name(&table, keys_ab));
    }

    /// Arrays of anything but bytes wrap the element's mapping.
    #[test]
    fn prop_arrays_wrap_their_element(element in recipe_strategy(2)) {
        prop_assume!(!matches!(element, Recipe::Special(SpecialType::Byte)));
        let mut table = TypeTable::new();
        let element_ty = build(&mut table, &element);
        let array = table.array(element_ty);

        let expected = format!("Array<{}>", expr_or_dynamic(map_fresh(&table, element_ty)));
        prop_assert_eq!(map_fresh(&table, array), MappedType::Expr(expected));
    }

    /// Lists and key views expand to `Array` of the right argument.
    #[test]
    fn prop_collections_expand_to_arrays(
        key in recipe_strategy(2),
        value in recipe_strategy(2),
    ) {
        let mut table = TypeTable::new();
        let key_ty = build(&mut table, &key);
        let list = build(&mut table, &Recipe::List(Box::new(value.clone())));
        let keys = build(&mut table, &Recipe::Keys(Box::new(key), Box::new(value)));

        let key_expr = expr_or_dynamic(map_fresh(&table, key_ty));
        prop_assert_eq!(
            map_fresh(&table, keys),
            MappedType::Expr(format!("Array<{key_expr}>"))
        );
        let list_expr = map_fresh(&table, list).into_expr().unwrap();
        prop_assert!(list_expr.starts_with("Array<"), "{}", list_expr);
    }

    /// Nullable value primitives get a dedicated wrapper; other value types
    /// the generic one.
    #[test]
    fn prop_nullable_wrappers(special in value_special_strategy()) {
        let mut table = TypeTable::new();
        let inner = table.special(special);
        let nullable = table.nullable(inner);

        let inner_expr = map_fresh(&table, inner).into_expr().unwrap();
        let expected = match inner_expr.as_str() {
            "Int" | "Float" | "Bool" => format!("Nullable_{inner_expr}"),
            _ => format!("Nullable<{inner_expr}>"),
        };
        prop_assert_eq!(map_fresh(&table, nullable), MappedType::Expr(expected));
    }

    /// A delegate has one arrow per parameter, and at least one.
    #[test]
    fn prop_delegate_arity(
        params in prop::collection::vec(leaf_strategy(), 0..5),
        ret in leaf_strategy(),
    ) {
        let arity = params.len();
        let mut table = TypeTable::new();
        let func = build(&mut table, &Recipe::Func(params, Box::new(ret)));

        let expr = map_fresh(&table, func).into_expr().unwrap();
        prop_assert!(expr.starts_with('(') && expr.ends_with(')'), "{}", expr);
        prop_assert_eq!(expr.matches(" -> ").count(), arity.max(1));
    }
}
