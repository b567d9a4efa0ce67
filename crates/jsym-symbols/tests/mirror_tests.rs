use super::*;

#[test]
fn test_primitive_mirror() {
    let int = JvmClass::primitive(PrimitiveKind::Int);
    assert_eq!(int.name(), "int");
    assert_eq!(int.type_name(), "int");
    assert!(int.is_primitive());
    assert!(!int.is_array());
    assert_eq!(int.component_type(), None);
}

#[test]
fn test_primitive_array_names() {
    let int = JvmClass::primitive(PrimitiveKind::Int);
    let matrix = int.array_of(2).expect("two dimensions");
    assert_eq!(matrix.name(), "[[I");
    assert_eq!(matrix.type_name(), "int[][]");
    assert_eq!(matrix.dimensions(), 2);
    assert!(!matrix.is_primitive());

    let longs = JvmClass::primitive(PrimitiveKind::Long)
        .array_of(1)
        .expect("one dimension");
    assert_eq!(longs.name(), "[J");
    let booleans = JvmClass::primitive(PrimitiveKind::Boolean)
        .array_of(1)
        .expect("one dimension");
    assert_eq!(booleans.name(), "[Z");
}

#[test]
fn test_named_array_names() {
    let entry = JvmClass::named("java.util.Map$Entry");
    assert_eq!(entry.name(), "java.util.Map$Entry");

    let entries = entry.array_of(1).expect("one dimension");
    assert_eq!(entries.name(), "[Ljava.util.Map$Entry;");
    assert_eq!(entries.type_name(), "java.util.Map$Entry[]");
    assert_eq!(entries.to_string(), "[Ljava.util.Map$Entry;");
}

#[test]
fn test_array_of_adds_to_existing_dimensions() {
    let int = JvmClass::primitive(PrimitiveKind::Int);
    let one = int.array_of(1).expect("one dimension");
    let three = one.array_of(2).expect("three dimensions");
    assert_eq!(three, int.array_of(3).expect("three dimensions"));
    assert_eq!(three.component_type(), one.array_of(1));
}

#[test]
fn test_component_type_walks_down() {
    let matrix = JvmClass::named("java.lang.String")
        .array_of(2)
        .expect("two dimensions");
    let row = matrix.component_type().expect("array");
    assert_eq!(row.name(), "[Ljava.lang.String;");
    let elem = row.component_type().expect("array");
    assert_eq!(elem, JvmClass::named("java.lang.String"));
    assert_eq!(elem.component_type(), None);
}

#[test]
fn test_no_array_of_void() {
    assert_eq!(JvmClass::primitive(PrimitiveKind::Void).array_of(1), None);
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(JvmClass::named("java.lang.Object").array_of(0), None);
}

#[test]
fn test_dimension_limit() {
    let int = JvmClass::primitive(PrimitiveKind::Int);
    let max = int.array_of(MAX_ARRAY_DIMENSIONS).expect("at the limit");
    assert_eq!(max.dimensions(), MAX_ARRAY_DIMENSIONS);
    assert_eq!(max.array_of(1), None);
    assert_eq!(int.array_of(MAX_ARRAY_DIMENSIONS + 1), None);
}

#[test]
fn test_equality_is_by_value() {
    let lhs = JvmClass::named("java.lang.String").array_of(1);
    let rhs = JvmClass::named("java.lang.String").array_of(1);
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, JvmClass::named("java.lang.Object").array_of(1));
}

#[test]
fn test_serialized_form() {
    let matrix = JvmClass::primitive(PrimitiveKind::Int)
        .array_of(2)
        .expect("two dimensions");
    let json = serde_json::to_value(&matrix).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({ "element": { "primitive": "int" }, "dimensions": 2 })
    );

    let named = serde_json::to_value(JvmClass::named("java.lang.String")).expect("serializes");
    assert_eq!(
        named,
        serde_json::json!({ "element": { "named": "java.lang.String" }, "dimensions": 0 })
    );
}
