use super::*;

#[test]
fn qualified_names_never_use_keywords() {
    for special in SpecialType::ALL {
        let qualified = special.qualified_name();
        if let Some(keyword) = special.keyword() {
            assert_ne!(qualified, keyword);
        }
        assert!(qualified.starts_with("System."), "{qualified}");
    }
}

#[test]
fn enumerable_lives_in_collections() {
    assert_eq!(
        SpecialType::Enumerable.qualified_name(),
        "System.Collections.IEnumerable"
    );
}

#[test]
fn reference_built_ins() {
    assert!(!SpecialType::String.is_value_type());
    assert!(!SpecialType::Object.is_value_type());
    assert!(!SpecialType::Array.is_value_type());
    assert!(SpecialType::Int32.is_value_type());
    assert!(SpecialType::DateTime.is_value_type());
}

#[test]
fn all_is_exhaustive_and_unique() {
    use std::collections::HashSet;
    let set: HashSet<_> = SpecialType::ALL.iter().collect();
    assert_eq!(set.len(), SpecialType::ALL.len());
}
