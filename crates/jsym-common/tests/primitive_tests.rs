use super::*;

#[test]
fn test_descriptors() {
    let descriptors: String = PrimitiveKind::ALL
        .into_iter()
        .map(PrimitiveKind::descriptor)
        .collect();
    assert_eq!(descriptors, "ZBCSIJFDV");
}

#[test]
fn test_from_name() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(PrimitiveKind::from_name("Integer"), None);
    assert_eq!(PrimitiveKind::from_name(""), None);
}

#[test]
fn test_only_void_is_void() {
    let voids: Vec<PrimitiveKind> = PrimitiveKind::ALL
        .into_iter()
        .filter(|kind| kind.is_void())
        .collect();
    assert_eq!(voids, [PrimitiveKind::Void]);
}

#[test]
fn test_serialized_as_keyword() {
    let json = serde_json::to_string(&PrimitiveKind::Double).expect("serializes");
    assert_eq!(json, "\"double\"");
    assert_eq!(PrimitiveKind::Boolean.to_string(), "boolean");
}
