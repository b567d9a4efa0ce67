//! Array type symbols.
//!
//! An `ArraySymbol` represents `T[]` for any component symbol `T` without
//! asking the host runtime for the array class. Every property is derived
//! from the component on demand:
//!
//! | Query | Result for `String[]` | Result for `int[][]` |
//! |-------|-----------------------|----------------------|
//! | binary name | `java.lang.String[]` | `int[][]` |
//! | canonical name | `java.lang.String[]` | `int[][]` |
//! | simple name | `String[]` | `int[][]` |
//! | modifiers | `public abstract final` | `public abstract final` |
//! | superclass | `java.lang.Object` | `java.lang.Object` |
//! | interfaces | `Cloneable, Serializable` | `Cloneable, Serializable` |
//! | mirror | `[Ljava.lang.String;` | `[[I` |
//!
//! The symbol stores nothing but its component and the shared supertypes it
//! was built with; equality and hashing look at the component only. Both
//! walk the component chain, which is at most `MAX_ARRAY_DIMENSIONS` deep.

use crate::array_members::{ArrayCloneMethod, ArrayConstructor, ArrayLengthField};
use crate::error::SymbolError;
use crate::factory::{JavaLangSymbols, SymbolFactory};
use crate::members::{ConstructorSymbol, FieldSymbol, MethodSymbol};
use crate::mirror::JvmClass;
use crate::symbol::{ClassSymbol, TypeDeclSymbol, TypeParamSymbol, TypeSymbol};
use jsym_common::Modifiers;
use jsym_common::limits::MAX_ARRAY_DIMENSIONS;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{trace, warn};

/// Suffix appended to the component's names.
const ARRAY_SUFFIX: &str = "[]";

/// The symbol of an array type.
///
/// Cloning shares the underlying data.
#[derive(Clone)]
pub struct ArraySymbol(Arc<ArrayData>);

struct ArrayData {
    component: TypeSymbol,
    java_lang: Arc<JavaLangSymbols>,
}

impl ArraySymbol {
    /// Create the symbol of the array type whose elements are `component`.
    ///
    /// The shared supertypes are taken from `factory`. Prefer
    /// [`SymbolFactory::array_of`], which also interns the result.
    ///
    /// # Errors
    /// Fails with [`SymbolError::AnonymousComponent`] if `component` is an
    /// anonymous class, which can never be an array element type, and with
    /// [`SymbolError::TooManyDimensions`] if the array would have more than
    /// [`MAX_ARRAY_DIMENSIONS`] dimensions.
    pub fn new(factory: &SymbolFactory, component: TypeSymbol) -> Result<Self, SymbolError> {
        if component.is_anonymous_class() {
            warn!(component = %component, "rejecting anonymous class as array component");
            return Err(SymbolError::AnonymousComponent {
                component: component.to_string(),
            });
        }

        let requested = component.as_array().map_or(0, Self::dimensions) + 1;
        if requested > MAX_ARRAY_DIMENSIONS {
            warn!(requested, "rejecting array type beyond the dimension limit");
            return Err(SymbolError::TooManyDimensions {
                requested,
                max: MAX_ARRAY_DIMENSIONS,
            });
        }

        Ok(Self(Arc::new(ArrayData {
            component,
            java_lang: Arc::clone(factory.java_lang()),
        })))
    }

    /// The element type of this array type (`int[]` for `int[][]`).
    pub fn component(&self) -> &TypeSymbol {
        &self.0.component
    }

    /// The innermost non-array element type (`int` for `int[][]`).
    pub fn element_type(&self) -> &TypeSymbol {
        self.unwrap_nested().0
    }

    /// Number of dimensions of this array type (2 for `int[][]`).
    pub fn dimensions(&self) -> usize {
        self.unwrap_nested().1 + 1
    }

    /// Walk down nested array components until a non-array symbol is found.
    ///
    /// Returns that symbol and the number of array components passed on the
    /// way, which excludes this symbol's own dimension.
    fn unwrap_nested(&self) -> (&TypeSymbol, usize) {
        let mut elt = self.component();
        let mut depth = 0;
        while let Some(inner) = elt
            .as_class()
            .filter(|class| class.is_array())
            .and_then(|class| class.array_component())
        {
            elt = inner;
            depth += 1;
        }
        (elt, depth)
    }
}

impl TypeDeclSymbol for ArraySymbol {
    fn simple_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{}{ARRAY_SUFFIX}", self.component().simple_name()))
    }

    fn package_name(&self) -> Cow<'_, str> {
        self.component().package_name()
    }

    fn modifiers(&self) -> Modifiers {
        let comp = self.component().modifiers();
        Modifiers::FINAL | Modifiers::ABSTRACT | (comp - Modifiers::STATIC)
    }

    fn jvm_repr(&self) -> Option<JvmClass> {
        let (elt, depth) = self.unwrap_nested();
        let Some(elt_class) = elt.jvm_repr() else {
            trace!(array = %self, element = %elt, "no runtime class for array element");
            return None;
        };
        elt_class.array_of(depth + 1)
    }

    fn is_primitive(&self) -> bool {
        false
    }

    fn is_array(&self) -> bool {
        true
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

    fn is_unresolved(&self) -> bool {
        false
    }
}

impl ClassSymbol for ArraySymbol {
    fn binary_name(&self) -> Cow<'_, str> {
        let component = self.component();
        let name = match component.as_class() {
            Some(class) => class.binary_name(),
            None => component.simple_name(),
        };
        Cow::Owned(format!("{name}{ARRAY_SUFFIX}"))
    }

    fn canonical_name(&self) -> Option<Cow<'_, str>> {
        let component = self.component();
        let name = match component.as_class() {
            Some(class) => class.canonical_name()?,
            None => component.simple_name(),
        };
        Some(Cow::Owned(format!("{name}{ARRAY_SUFFIX}")))
    }

    fn superclass(&self) -> Option<TypeSymbol> {
        Some(self.0.java_lang.object().clone())
    }

    fn super_interfaces(&self) -> Arc<[TypeSymbol]> {
        self.0.java_lang.array_super_interfaces()
    }

    fn declared_fields(&self) -> Vec<Box<dyn FieldSymbol>> {
        vec![Box::new(ArrayLengthField::new(self.clone()))]
    }

    fn declared_methods(&self) -> Vec<Box<dyn MethodSymbol>> {
        vec![Box::new(ArrayCloneMethod::new(self.clone()))]
    }

    fn constructors(&self) -> Vec<Box<dyn ConstructorSymbol>> {
        vec![Box::new(ArrayConstructor::new(self.clone()))]
    }

    fn declared_classes(&self) -> Vec<TypeSymbol> {
        Vec::new()
    }

    fn type_parameters(&self) -> Vec<TypeParamSymbol> {
        Vec::new()
    }

    fn enclosing_class(&self) -> Option<TypeSymbol> {
        None
    }

    fn enclosing_method(&self) -> Option<Box<dyn MethodSymbol>> {
        None
    }

    fn array_component(&self) -> Option<&TypeSymbol> {
        Some(self.component())
    }

    fn to_type_symbol(&self) -> TypeSymbol {
        TypeSymbol::Array(self.clone())
    }
}

impl PartialEq for ArraySymbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.component() == other.component()
    }
}

impl Eq for ArraySymbol {}

impl Hash for ArraySymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.component().hash(state);
    }
}

impl fmt::Debug for ArraySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArraySymbol").field(self.component()).finish()
    }
}

impl fmt::Display for ArraySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array({})", self.component())
    }
}

#[cfg(test)]
#[path = "../tests/array_tests.rs"]
mod tests;
