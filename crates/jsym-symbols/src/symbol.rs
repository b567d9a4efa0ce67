//! Type-declaration symbols.
//!
//! A type-declaration symbol names a type that the analyzer can reason about
//! without the host runtime having loaded it. The set of categories is
//! closed, so `TypeSymbol` is an enum; the capabilities shared by all of
//! them live on `TypeDeclSymbol`, and the class-level capabilities shared by
//! ordinary classes and arrays live on `ClassSymbol`.
//!
//! | Variant | `as_class()` | Types |
//! |---------|--------------|---------|
//! | `Primitive` | `None` | `int`, `void` |
//! | `Class` | `Some` | `java.lang.String`, `java.util.Map$Entry` |
//! | `Array` | `Some` | `int[]`, `java.lang.String[][]` |

use crate::array::ArraySymbol;
use crate::class_stub::ClassStub;
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::mirror::JvmClass;
use crate::primitive::PrimitiveSymbol;
use jsym_common::Modifiers;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// =============================================================================
// TypeDeclSymbol - capabilities of every type symbol
// =============================================================================

/// Queries answered by every type-declaration symbol.
pub trait TypeDeclSymbol: fmt::Debug + fmt::Display + Send + Sync {
    /// The simple name: `int`, `String`, `Entry`, `String[]`.
    fn simple_name(&self) -> Cow<'_, str>;

    /// The name of the package the type belongs to.
    fn package_name(&self) -> Cow<'_, str>;

    /// The modifiers reflection would report for this type.
    fn modifiers(&self) -> Modifiers;

    /// The runtime class object for this type, if the host platform can
    /// have one.
    fn jvm_repr(&self) -> Option<JvmClass>;

    fn is_primitive(&self) -> bool {
        false
    }

    fn is_array(&self) -> bool {
        false
    }

    fn is_interface(&self) -> bool {
        false
    }

    fn is_enum(&self) -> bool {
        false
    }

    fn is_annotation(&self) -> bool {
        false
    }

    fn is_local_class(&self) -> bool {
        false
    }

    fn is_anonymous_class(&self) -> bool {
        false
    }

    /// Whether this symbol stands in for a type that could not be resolved.
    fn is_unresolved(&self) -> bool {
        false
    }
}

// =============================================================================
// ClassSymbol - class-level capabilities
// =============================================================================

/// Queries answered by class, interface and array symbols.
///
/// Code that holds a `&dyn ClassSymbol` cannot tell a declared class from a
/// synthesized array class; both answer exactly as reflection would for the
/// corresponding loaded class.
pub trait ClassSymbol: TypeDeclSymbol {
    /// The binary name (`java.util.Map$Entry`, `int[]`).
    fn binary_name(&self) -> Cow<'_, str>;

    /// The canonical name (`java.util.Map.Entry`), or `None` for local and
    /// anonymous classes and for arrays of them.
    fn canonical_name(&self) -> Option<Cow<'_, str>>;

    fn superclass(&self) -> Option<TypeSymbol>;

    /// Directly implemented interfaces, in declaration order.
    fn super_interfaces(&self) -> Arc<[TypeSymbol]>;

    fn declared_fields(&self) -> Vec<Box<dyn FieldSymbol>>;

    fn declared_methods(&self) -> Vec<Box<dyn MethodSymbol>>;

    fn constructors(&self) -> Vec<Box<dyn ConstructorSymbol>>;

    fn declared_classes(&self) -> Vec<TypeSymbol>;

    fn type_parameters(&self) -> Vec<TypeParamSymbol>;

    fn enclosing_class(&self) -> Option<TypeSymbol>;

    /// The method a local or anonymous class is declared in.
    fn enclosing_method(&self) -> Option<Box<dyn MethodSymbol>>;

    /// The component type, for array symbols.
    fn array_component(&self) -> Option<&TypeSymbol>;

    /// This symbol as a `TypeSymbol`.
    fn to_type_symbol(&self) -> TypeSymbol;
}

/// A declared type parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamSymbol {
    name: Arc<str>,
}

impl TypeParamSymbol {
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// ClassRef - any class or interface symbol
// =============================================================================

/// A shared handle to a class, interface, enum or annotation symbol.
///
/// Any `ClassSymbol` implementation can sit behind it: the crate's own
/// `ClassStub`, or symbols backed by reflection or by source. Two handles
/// are equal when they carry the same binary name. Array types belong in
/// `TypeSymbol::Array`, not here.
#[derive(Clone)]
pub struct ClassRef(Arc<dyn ClassSymbol>);

impl ClassRef {
    pub fn new<C: ClassSymbol + 'static>(class: C) -> Self {
        Self(Arc::new(class))
    }

    /// Wrap an already shared symbol without copying it.
    pub fn from_arc(class: Arc<dyn ClassSymbol>) -> Self {
        Self(class)
    }

    pub fn get(&self) -> &dyn ClassSymbol {
        &*self.0
    }
}

impl TypeDeclSymbol for ClassRef {
    fn simple_name(&self) -> Cow<'_, str> {
        self.0.simple_name()
    }

    fn package_name(&self) -> Cow<'_, str> {
        self.0.package_name()
    }

    fn modifiers(&self) -> Modifiers {
        self.0.modifiers()
    }

    fn jvm_repr(&self) -> Option<JvmClass> {
        self.0.jvm_repr()
    }

    fn is_primitive(&self) -> bool {
        self.0.is_primitive()
    }

    fn is_array(&self) -> bool {
        self.0.is_array()
    }

    fn is_interface(&self) -> bool {
        self.0.is_interface()
    }

    fn is_enum(&self) -> bool {
        self.0.is_enum()
    }

    fn is_annotation(&self) -> bool {
        self.0.is_annotation()
    }

    fn is_local_class(&self) -> bool {
        self.0.is_local_class()
    }

    fn is_anonymous_class(&self) -> bool {
        self.0.is_anonymous_class()
    }

    fn is_unresolved(&self) -> bool {
        self.0.is_unresolved()
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.binary_name() == other.0.binary_name()
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.binary_name().hash(state);
    }
}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassRef").field(&self.0).finish()
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

// =============================================================================
// TypeSymbol
// =============================================================================

/// A shared handle to a type-declaration symbol.
///
/// Cloning is cheap. Equality is structural: two array symbols are equal
/// when their components are equal, so `int[]` built twice is one type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeSymbol {
    Primitive(PrimitiveSymbol),
    Class(ClassRef),
    Array(ArraySymbol),
}

impl TypeSymbol {
    /// Class-level view of this symbol, `None` for primitives.
    pub fn as_class(&self) -> Option<&dyn ClassSymbol> {
        match self {
            Self::Primitive(_) => None,
            Self::Class(class) => Some(class.get()),
            Self::Array(array) => Some(array),
        }
    }

    pub fn as_array(&self) -> Option<&ArraySymbol> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    fn decl(&self) -> &dyn TypeDeclSymbol {
        match self {
            Self::Primitive(prim) => prim,
            Self::Class(class) => class,
            Self::Array(array) => array,
        }
    }
}

impl TypeDeclSymbol for TypeSymbol {
    fn simple_name(&self) -> Cow<'_, str> {
        self.decl().simple_name()
    }

    fn package_name(&self) -> Cow<'_, str> {
        self.decl().package_name()
    }

    fn modifiers(&self) -> Modifiers {
        self.decl().modifiers()
    }

    fn jvm_repr(&self) -> Option<JvmClass> {
        self.decl().jvm_repr()
    }

    fn is_primitive(&self) -> bool {
        self.decl().is_primitive()
    }

    fn is_array(&self) -> bool {
        self.decl().is_array()
    }

    fn is_interface(&self) -> bool {
        self.decl().is_interface()
    }

    fn is_enum(&self) -> bool {
        self.decl().is_enum()
    }

    fn is_annotation(&self) -> bool {
        self.decl().is_annotation()
    }

    fn is_local_class(&self) -> bool {
        self.decl().is_local_class()
    }

    fn is_anonymous_class(&self) -> bool {
        self.decl().is_anonymous_class()
    }

    fn is_unresolved(&self) -> bool {
        self.decl().is_unresolved()
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.decl(), f)
    }
}

impl From<PrimitiveSymbol> for TypeSymbol {
    fn from(prim: PrimitiveSymbol) -> Self {
        Self::Primitive(prim)
    }
}

impl From<ClassStub> for TypeSymbol {
    fn from(class: ClassStub) -> Self {
        Self::Class(ClassRef::new(class))
    }
}

impl From<ClassRef> for TypeSymbol {
    fn from(class: ClassRef) -> Self {
        Self::Class(class)
    }
}

impl From<ArraySymbol> for TypeSymbol {
    fn from(array: ArraySymbol) -> Self {
        Self::Array(array)
    }
}
