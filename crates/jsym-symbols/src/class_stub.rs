//! Declarative class and interface symbols.
//!
//! A `ClassStub` describes a class purely from data: its binary name, kind,
//! nesting, modifiers and supertypes. Simple, canonical and package names are
//! derived from the binary name the way reflection derives them. Stubs carry
//! no member data; members of ordinary classes come from the AST or from
//! reflection, not from this crate.

use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::mirror::JvmClass;
use crate::symbol::{ClassRef, ClassSymbol, TypeDeclSymbol, TypeParamSymbol, TypeSymbol};
use jsym_common::Modifiers;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// What sort of type declaration a class symbol stands for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    /// Bits `getModifiers()` always reports for a class of this kind.
    pub fn implied_modifiers(self) -> Modifiers {
        match self {
            Self::Class => Modifiers::empty(),
            Self::Interface => Modifiers::INTERFACE | Modifiers::ABSTRACT,
            Self::Enum => Modifiers::ENUM,
            Self::Annotation => {
                Modifiers::ANNOTATION | Modifiers::INTERFACE | Modifiers::ABSTRACT
            }
        }
    }
}

/// Where a class is declared.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nesting {
    #[default]
    TopLevel,
    /// Declared in the body of another class.
    Member,
    /// Declared in a block.
    Local,
    Anonymous,
}

/// The symbol of a class, interface, enum or annotation type.
///
/// Stubs are identified by binary name: two stubs with the same binary name
/// are the same type.
#[derive(Clone)]
pub struct ClassStub(Arc<ClassData>);

struct ClassData {
    binary_name: String,
    canonical_name: Option<String>,
    simple_name: String,
    package_name: String,
    modifiers: Modifiers,
    kind: ClassKind,
    nesting: Nesting,
    superclass: Option<TypeSymbol>,
    interfaces: Arc<[TypeSymbol]>,
    type_params: Vec<TypeParamSymbol>,
    enclosing_class: Option<TypeSymbol>,
    loadable: bool,
    unresolved: bool,
}

impl ClassStub {
    /// Start describing the class with the given binary name, e.g.
    /// `java.util.Map$Entry`.
    pub fn builder(binary_name: &str) -> ClassStubBuilder {
        ClassStubBuilder::new(binary_name)
    }

    pub fn kind(&self) -> ClassKind {
        self.0.kind
    }

    pub fn nesting(&self) -> Nesting {
        self.0.nesting
    }
}

impl TypeDeclSymbol for ClassStub {
    fn simple_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0.simple_name)
    }

    fn package_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0.package_name)
    }

    fn modifiers(&self) -> Modifiers {
        self.0.modifiers
    }

    fn jvm_repr(&self) -> Option<JvmClass> {
        (self.0.loadable && !self.0.unresolved).then(|| JvmClass::named(&self.0.binary_name))
    }

    fn is_interface(&self) -> bool {
        matches!(self.0.kind, ClassKind::Interface | ClassKind::Annotation)
    }

    fn is_enum(&self) -> bool {
        self.0.kind == ClassKind::Enum
    }

    fn is_annotation(&self) -> bool {
        self.0.kind == ClassKind::Annotation
    }

    fn is_local_class(&self) -> bool {
        self.0.nesting == Nesting::Local
    }

    fn is_anonymous_class(&self) -> bool {
        self.0.nesting == Nesting::Anonymous
    }

    fn is_unresolved(&self) -> bool {
        self.0.unresolved
    }
}

impl ClassSymbol for ClassStub {
    fn binary_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0.binary_name)
    }

    fn canonical_name(&self) -> Option<Cow<'_, str>> {
        self.0.canonical_name.as_deref().map(Cow::Borrowed)
    }

    fn superclass(&self) -> Option<TypeSymbol> {
        self.0.superclass.clone()
    }

    fn super_interfaces(&self) -> Arc<[TypeSymbol]> {
        Arc::clone(&self.0.interfaces)
    }

    fn declared_fields(&self) -> Vec<Box<dyn FieldSymbol>> {
        Vec::new()
    }

    fn declared_methods(&self) -> Vec<Box<dyn MethodSymbol>> {
        Vec::new()
    }

    fn constructors(&self) -> Vec<Box<dyn ConstructorSymbol>> {
        Vec::new()
    }

    fn declared_classes(&self) -> Vec<TypeSymbol> {
        Vec::new()
    }

    fn type_parameters(&self) -> Vec<TypeParamSymbol> {
        self.0.type_params.clone()
    }

    fn enclosing_class(&self) -> Option<TypeSymbol> {
        self.0.enclosing_class.clone()
    }

    fn enclosing_method(&self) -> Option<Box<dyn MethodSymbol>> {
        None
    }

    fn array_component(&self) -> Option<&TypeSymbol> {
        None
    }

    fn to_type_symbol(&self) -> TypeSymbol {
        TypeSymbol::Class(ClassRef::new(self.clone()))
    }
}

impl PartialEq for ClassStub {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.binary_name == other.0.binary_name
    }
}

impl Eq for ClassStub {}

impl Hash for ClassStub {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.binary_name.hash(state);
    }
}

impl fmt::Debug for ClassStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassStub").field(&self.0.binary_name).finish()
    }
}

impl fmt::Display for ClassStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.binary_name)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ClassStub`].
#[derive(Clone, Debug)]
pub struct ClassStubBuilder {
    binary_name: String,
    canonical_name: Option<Option<String>>,
    modifiers: Modifiers,
    kind: ClassKind,
    nesting: Nesting,
    superclass: Option<TypeSymbol>,
    interfaces: Vec<TypeSymbol>,
    type_params: Vec<TypeParamSymbol>,
    enclosing_class: Option<TypeSymbol>,
    loadable: bool,
    unresolved: bool,
}

impl ClassStubBuilder {
    fn new(binary_name: &str) -> Self {
        Self {
            binary_name: binary_name.to_string(),
            canonical_name: None,
            modifiers: Modifiers::empty(),
            kind: ClassKind::Class,
            nesting: Nesting::TopLevel,
            superclass: None,
            interfaces: Vec::new(),
            type_params: Vec::new(),
            enclosing_class: None,
            loadable: false,
            unresolved: false,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Declare the class as a member of `enclosing`.
    pub fn member_of(mut self, enclosing: TypeSymbol) -> Self {
        self.nesting = Nesting::Member;
        self.enclosing_class = Some(enclosing);
        self
    }

    pub fn local_in(mut self, enclosing: TypeSymbol) -> Self {
        self.nesting = Nesting::Local;
        self.enclosing_class = Some(enclosing);
        self
    }

    pub fn anonymous_in(mut self, enclosing: TypeSymbol) -> Self {
        self.nesting = Nesting::Anonymous;
        self.enclosing_class = Some(enclosing);
        self
    }

    pub fn superclass(mut self, superclass: TypeSymbol) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn interface(mut self, interface: TypeSymbol) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn type_param(mut self, name: &str) -> Self {
        self.type_params.push(TypeParamSymbol::new(name));
        self
    }

    /// Override the derived canonical name.
    pub fn canonical_name(mut self, name: Option<&str>) -> Self {
        self.canonical_name = Some(name.map(str::to_string));
        self
    }

    /// Mark the class as loadable by the host runtime, giving it a mirror.
    pub fn loadable(mut self) -> Self {
        self.loadable = true;
        self
    }

    /// Mark the symbol as a placeholder for a type that failed to resolve.
    pub fn unresolved(mut self) -> Self {
        self.unresolved = true;
        self
    }

    pub fn build(self) -> ClassStub {
        let (package_name, tail) = match self.binary_name.rsplit_once('.') {
            Some((pkg, tail)) => (pkg.to_string(), tail),
            None => (String::new(), self.binary_name.as_str()),
        };
        let nested_tail = tail.rsplit_once('$').map_or(tail, |(_, name)| name);
        let simple_name = match self.nesting {
            Nesting::TopLevel => tail.to_string(),
            Nesting::Member => nested_tail.to_string(),
            Nesting::Local => nested_tail
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .to_string(),
            Nesting::Anonymous => String::new(),
        };

        let canonical_name = match self.canonical_name {
            Some(explicit) => explicit,
            None => derive_canonical_name(
                &self.binary_name,
                &simple_name,
                self.nesting,
                self.enclosing_class.as_ref(),
            ),
        };

        let modifiers = self.modifiers | self.kind.implied_modifiers();

        ClassStub(Arc::new(ClassData {
            binary_name: self.binary_name,
            canonical_name,
            simple_name,
            package_name,
            modifiers,
            kind: self.kind,
            nesting: self.nesting,
            superclass: self.superclass,
            interfaces: self.interfaces.into(),
            type_params: self.type_params,
            enclosing_class: self.enclosing_class,
            loadable: self.loadable,
            unresolved: self.unresolved,
        }))
    }
}

fn derive_canonical_name(
    binary_name: &str,
    simple_name: &str,
    nesting: Nesting,
    enclosing: Option<&TypeSymbol>,
) -> Option<String> {
    match nesting {
        Nesting::TopLevel => Some(binary_name.to_string()),
        Nesting::Member => match enclosing.and_then(TypeSymbol::as_class) {
            Some(outer) => outer
                .canonical_name()
                .map(|outer_name| format!("{outer_name}.{simple_name}")),
            None => Some(binary_name.replace('$', ".")),
        },
        Nesting::Local | Nesting::Anonymous => None,
    }
}

#[cfg(test)]
#[path = "../tests/class_stub_tests.rs"]
mod tests;
