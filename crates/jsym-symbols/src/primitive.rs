//! Primitive and `void` symbols.

use crate::mirror::JvmClass;
use crate::symbol::TypeDeclSymbol;
use jsym_common::{Modifiers, PrimitiveKind};
use std::borrow::Cow;
use std::fmt;

/// Package reflection reports for primitive classes.
const PRIMITIVE_PACKAGE: &str = "java.lang";

/// The symbol of a primitive type or `void`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveSymbol(PrimitiveKind);

impl PrimitiveSymbol {
    pub const fn new(kind: PrimitiveKind) -> Self {
        Self(kind)
    }

    pub const fn kind(self) -> PrimitiveKind {
        self.0
    }
}

impl TypeDeclSymbol for PrimitiveSymbol {
    fn simple_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0.name())
    }

    fn package_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(PRIMITIVE_PACKAGE)
    }

    // `int.class.getModifiers()`
    fn modifiers(&self) -> Modifiers {
        Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::ABSTRACT
    }

    fn jvm_repr(&self) -> Option<JvmClass> {
        Some(JvmClass::primitive(self.0))
    }

    fn is_primitive(&self) -> bool {
        true
    }
}

impl fmt::Display for PrimitiveSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl From<PrimitiveKind> for PrimitiveSymbol {
    fn from(kind: PrimitiveKind) -> Self {
        Self(kind)
    }
}
