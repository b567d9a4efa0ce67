//! Synthetic members of array types.
//!
//! Every array type implicitly declares a `length` field, a covariant
//! `clone()` override and a one-argument constructor taking the length.
//! These members are rebuilt on each query and compare equal whenever their
//! owning array symbols do.

use crate::array::ArraySymbol;
use crate::members::{
    ConstructorSymbol, ExecutableSymbol, FieldSymbol, FormalParamSymbol, MemberSymbol,
    MethodSymbol,
};
use crate::symbol::{TypeParamSymbol, TypeSymbol};
use jsym_common::Modifiers;

// =============================================================================
// length
// =============================================================================

/// The `length` field of an array type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayLengthField {
    array: ArraySymbol,
}

impl ArrayLengthField {
    pub fn new(array: ArraySymbol) -> Self {
        Self { array }
    }
}

impl MemberSymbol for ArrayLengthField {
    fn simple_name(&self) -> &str {
        "length"
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::PUBLIC | Modifiers::FINAL
    }

    fn enclosing_class(&self) -> TypeSymbol {
        TypeSymbol::Array(self.array.clone())
    }
}

impl FieldSymbol for ArrayLengthField {
    fn is_enum_constant(&self) -> bool {
        false
    }
}

// =============================================================================
// clone()
// =============================================================================

/// The public no-argument `clone()` method of an array type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayCloneMethod {
    array: ArraySymbol,
}

impl ArrayCloneMethod {
    pub fn new(array: ArraySymbol) -> Self {
        Self { array }
    }
}

impl MemberSymbol for ArrayCloneMethod {
    fn simple_name(&self) -> &str {
        "clone"
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::PUBLIC
    }

    fn enclosing_class(&self) -> TypeSymbol {
        TypeSymbol::Array(self.array.clone())
    }
}

impl ExecutableSymbol for ArrayCloneMethod {
    fn formal_parameters(&self) -> Vec<Box<dyn FormalParamSymbol>> {
        Vec::new()
    }

    fn arity(&self) -> usize {
        0
    }

    fn is_varargs(&self) -> bool {
        false
    }

    fn type_parameters(&self) -> Vec<TypeParamSymbol> {
        Vec::new()
    }
}

impl MethodSymbol for ArrayCloneMethod {}

// =============================================================================
// Constructor
// =============================================================================

/// JVM name of instance initializers.
const CONSTRUCTOR_NAME: &str = "<init>";

/// Name given to the constructor's single parameter.
const LENGTH_PARAM_NAME: &str = "arg0";

/// The constructor used by `new T[n]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayConstructor {
    array: ArraySymbol,
}

impl ArrayConstructor {
    pub fn new(array: ArraySymbol) -> Self {
        Self { array }
    }
}

impl MemberSymbol for ArrayConstructor {
    fn simple_name(&self) -> &str {
        CONSTRUCTOR_NAME
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::PUBLIC | Modifiers::FINAL
    }

    fn enclosing_class(&self) -> TypeSymbol {
        TypeSymbol::Array(self.array.clone())
    }
}

impl ExecutableSymbol for ArrayConstructor {
    fn formal_parameters(&self) -> Vec<Box<dyn FormalParamSymbol>> {
        vec![Box::new(ArrayConstructorParam { ctor: self.clone() })]
    }

    fn arity(&self) -> usize {
        1
    }

    fn is_varargs(&self) -> bool {
        false
    }

    fn type_parameters(&self) -> Vec<TypeParamSymbol> {
        Vec::new()
    }
}

impl ConstructorSymbol for ArrayConstructor {}

/// The length parameter of [`ArrayConstructor`].
///
/// Two parameters are equal when their constructors are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArrayConstructorParam {
    ctor: ArrayConstructor,
}

impl FormalParamSymbol for ArrayConstructorParam {
    fn simple_name(&self) -> &str {
        LENGTH_PARAM_NAME
    }

    fn is_final(&self) -> bool {
        false
    }

    fn declaring_symbol(&self) -> Box<dyn ExecutableSymbol> {
        Box::new(self.ctor.clone())
    }
}

#[cfg(test)]
#[path = "../tests/array_members_tests.rs"]
mod tests;
