use super::*;

#[test]
fn native_values() {
    for expr in ["Int", "Float", "Bool", "String"] {
        assert!(is_native_value(expr), "{expr}");
    }
    for expr in ["Dynamic", "Void", "Array<Int>", "Nullable_Int", "int"] {
        assert!(!is_native_value(expr), "{expr}");
    }
}

#[test]
fn nullable_primitives() {
    assert_eq!(nullable_primitive("Int").as_deref(), Some("Nullable_Int"));
    assert_eq!(nullable_primitive("Float").as_deref(), Some("Nullable_Float"));
    assert_eq!(nullable_primitive("Bool").as_deref(), Some("Nullable_Bool"));
    // strings are already nullable in the target
    assert_eq!(nullable_primitive("String"), None);
    assert_eq!(nullable_primitive("app.Point"), None);
}

#[test]
fn default_values() {
    assert_eq!(default_value("Int"), "0");
    assert_eq!(default_value("Float"), "0");
    assert_eq!(default_value("Bool"), "false");
    assert_eq!(default_value("String"), "null");
    assert_eq!(default_value("Nullable_Int"), "null");
}

#[test]
fn strip_generic_arguments() {
    assert_eq!(remove_generic_arguments("Array<Int>"), "Array");
    assert_eq!(remove_generic_arguments("Nullable<Array<Int>>"), "Nullable");
    assert_eq!(remove_generic_arguments("haxe.io.Bytes"), "haxe.io.Bytes");
    assert_eq!(remove_generic_arguments(""), "");
}
