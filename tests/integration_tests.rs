//! End-to-end checks of array symbols through the public facade.
//!
//! These exercise the same queries downstream type-resolution code makes,
//! mixing declared classes, primitives and arrays behind `&dyn ClassSymbol`.

use jsym::{
    ClassKind, ClassStub, ClassSymbol, ExecutableSymbol, FormalParamSymbol, JvmClass,
    MemberSymbol, Modifiers, PrimitiveKind, SymbolError, SymbolFactory, TypeDeclSymbol,
    TypeSymbol,
};
use rayon::prelude::*;

fn setup() -> SymbolFactory {
    jsym::tracing_config::init_tracing();
    SymbolFactory::new()
}

fn string() -> TypeSymbol {
    ClassStub::builder("java.lang.String")
        .modifiers(Modifiers::PUBLIC | Modifiers::FINAL)
        .loadable()
        .build()
        .into()
}

/// Every class-level view answers the same questions, array or not.
fn describe(class: &dyn ClassSymbol) -> (String, Option<String>, String) {
    (
        class.binary_name().into_owned(),
        class.canonical_name().map(|name| name.into_owned()),
        class.modifiers().to_string(),
    )
}

#[test]
fn test_uniform_class_view() {
    let factory = setup();
    let string = string();
    let strings = factory.array_of(&string).expect("valid component");

    let views: Vec<(String, Option<String>, String)> = [&string, &strings]
        .into_iter()
        .filter_map(TypeSymbol::as_class)
        .map(describe)
        .collect();

    assert_eq!(
        views,
        vec![
            (
                "java.lang.String".to_string(),
                Some("java.lang.String".to_string()),
                "public final".to_string()
            ),
            (
                "java.lang.String[]".to_string(),
                Some("java.lang.String[]".to_string()),
                "public abstract final".to_string()
            ),
        ]
    );
}

#[test]
fn test_primitive_has_no_class_view() {
    let factory = setup();
    let int = factory.primitive(PrimitiveKind::Int);
    assert!(int.as_class().is_none());
    assert!(int.is_primitive());
    assert_eq!(int.simple_name(), "int");
    assert_eq!(int.jvm_repr(), Some(JvmClass::primitive(PrimitiveKind::Int)));
}

#[test]
fn test_array_members_point_back_to_array() {
    let factory = setup();
    let strings = factory.array_of(&string()).expect("valid component");
    let class = strings.as_class().expect("class view");

    for field in class.declared_fields() {
        assert_eq!(field.enclosing_class(), strings);
    }
    for method in class.declared_methods() {
        assert_eq!(method.enclosing_class(), strings);
    }
    for ctor in class.constructors() {
        assert_eq!(ctor.enclosing_class(), strings);
        for param in ctor.formal_parameters() {
            assert_eq!(param.enclosing_class(), strings);
        }
    }
}

#[test]
fn test_supertypes_identical_across_arrays() {
    let factory = setup();
    let int = factory.primitive(PrimitiveKind::Int);
    let ints = factory.array_of(&int).expect("valid component");
    let strings = factory.array_of(&string()).expect("valid component");

    let ints = ints.as_class().expect("class view");
    let strings = strings.as_class().expect("class view");
    assert_eq!(ints.superclass(), strings.superclass());
    assert_eq!(ints.super_interfaces(), strings.super_interfaces());

    let names: Vec<String> = ints
        .super_interfaces()
        .iter()
        .filter_map(TypeSymbol::as_class)
        .map(|iface| iface.binary_name().into_owned())
        .collect();
    assert_eq!(names, ["java.lang.Cloneable", "java.io.Serializable"]);
}

#[test]
fn test_array_of_interface() {
    let factory = setup();
    let runnable: TypeSymbol = ClassStub::builder("java.lang.Runnable")
        .kind(ClassKind::Interface)
        .modifiers(Modifiers::PUBLIC)
        .loadable()
        .build()
        .into();
    let runnables = factory.array_of(&runnable).expect("valid component");

    assert!(runnable.is_interface());
    assert!(!runnables.is_interface());
    assert!(runnables.modifiers().contains(Modifiers::FINAL | Modifiers::ABSTRACT));
    assert_eq!(
        runnables.jvm_repr().map(|mirror| mirror.name()),
        Some("[Ljava.lang.Runnable;".to_string())
    );
}

#[test]
fn test_anonymous_component_error_message() {
    let factory = setup();
    let outer: TypeSymbol = ClassStub::builder("p.Outer").build().into();
    let anon: TypeSymbol = ClassStub::builder("p.Outer$1")
        .anonymous_in(outer)
        .build()
        .into();

    let err = factory.array_of(&anon).expect_err("anonymous component");
    assert_eq!(
        err.to_string(),
        "anonymous classes cannot be array components: p.Outer$1"
    );
    assert!(matches!(err, SymbolError::AnonymousComponent { .. }));
}

#[test]
fn test_concurrent_queries_on_shared_symbol() {
    let factory = setup();
    let int = factory.primitive(PrimitiveKind::Int);
    let matrix = factory.array_of_dims(&int, 2).expect("valid component");
    let expected = JvmClass::primitive(PrimitiveKind::Int).array_of(2);

    let results: Vec<(String, Option<JvmClass>)> = (0..64)
        .into_par_iter()
        .map(|_| {
            let class = matrix.as_class().expect("class view");
            (class.binary_name().into_owned(), matrix.jvm_repr())
        })
        .collect();

    for (name, mirror) in results {
        assert_eq!(name, "int[][]");
        assert_eq!(mirror, expected);
    }
}
