use pretty_assertions::assert_eq;

use crate::{SpecialType, TableError, TypeTable};

const GENERIC: &str = "System.Collections.Generic";

#[test]
fn specials_use_keywords_when_available() {
    let mut table = TypeTable::new();
    let int = table.special(SpecialType::Int32);
    let array = table.special(SpecialType::Array);
    let enumerable = table.special(SpecialType::Enumerable);

    assert_eq!(table.display(int), "int");
    assert_eq!(table.display(array), "System.Array");
    assert_eq!(table.display(enumerable), "System.Collections.IEnumerable");
}

#[test]
fn generic_definitions_and_instances() -> Result<(), TableError> {
    let mut table = TypeTable::new();
    let string = table.special(SpecialType::String);
    let int = table.special(SpecialType::Int32);
    let list = table.generic(GENERIC, "List", 1, false);
    let dict = table.generic(GENERIC, "Dictionary", 2, false);
    let dict_string_int = table.instantiate(dict, [string, int])?;

    assert_eq!(table.display(list), "System.Collections.Generic.List<>");
    assert_eq!(table.display(dict), "System.Collections.Generic.Dictionary<,>");
    assert_eq!(
        table.display(dict_string_int),
        "System.Collections.Generic.Dictionary<string, int>"
    );
    Ok(())
}

#[test]
fn nested_types_print_their_container() -> Result<(), TableError> {
    let mut table = TypeTable::new();
    let string = table.special(SpecialType::String);
    let int = table.special(SpecialType::Int32);
    let dict = table.generic(GENERIC, "Dictionary", 2, false);
    let bound = table.instantiate(dict, [string, int])?;
    let keys = table.nested(bound, "KeyCollection", 0, false)?;

    assert_eq!(
        table.display(keys),
        "System.Collections.Generic.Dictionary<string, int>.KeyCollection"
    );
    let unbound = table.unbound_form(keys);
    assert_eq!(
        unbound.map(|id| table.display(id)).as_deref(),
        Some("System.Collections.Generic.Dictionary<,>.KeyCollection")
    );
    Ok(())
}

#[test]
fn arrays_nullables_and_parameters() {
    let mut table = TypeTable::new();
    let byte = table.special(SpecialType::Byte);
    let bytes = table.array(byte);
    let jagged = table.array(bytes);
    let int = table.special(SpecialType::Int32);
    let maybe = table.nullable(int);
    let t = table.type_parameter("T");

    assert_eq!(table.display(bytes), "byte[]");
    assert_eq!(table.display(jagged), "byte[][]");
    assert_eq!(table.display(maybe), "int?");
    assert_eq!(table.display(t), "T");
}

#[test]
fn global_namespace_has_no_prefix() {
    let mut table = TypeTable::new();
    let widget = table.named("", "Widget", false);
    assert_eq!(table.display(widget), "Widget");
}

#[test]
fn anonymous_members_in_order() {
    let mut table = TypeTable::new();
    let int = table.special(SpecialType::Int32);
    let string = table.special(SpecialType::String);
    let anon = table.anonymous([("Id", int), ("Name", string)]);
    let empty = table.anonymous([]);

    assert_eq!(table.display(anon), "<anonymous type: int Id, string Name>");
    assert_eq!(table.display(empty), "<anonymous type>");
}
