//! Member symbols: fields, methods, constructors and formal parameters.
//!
//! Member symbols are handed out as trait objects. Equality and hashing of
//! trait objects go through `DynSymbol`, which compares the concrete types
//! first and then delegates to their own `PartialEq`/`Hash`.

use crate::symbol::{TypeParamSymbol, TypeSymbol};
use jsym_common::Modifiers;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// DynSymbol - equality plumbing for trait objects
// =============================================================================

/// Object-safe equality and hashing, implemented for every sized symbol type
/// with ordinary `PartialEq + Hash`.
pub trait DynSymbol: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// True if `other` has the same concrete type and compares equal.
    fn dyn_eq(&self, other: &dyn Any) -> bool;

    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T> DynSymbol for T
where
    T: Any + PartialEq + Hash + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

macro_rules! impl_dyn_identity {
    ($($tr:ident),* $(,)?) => {
        $(
            impl PartialEq for dyn $tr {
                fn eq(&self, other: &Self) -> bool {
                    self.dyn_eq(other.as_any())
                }
            }

            impl Eq for dyn $tr {}

            impl Hash for dyn $tr {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.dyn_hash(state);
                }
            }
        )*
    };
}

impl_dyn_identity!(
    FieldSymbol,
    MethodSymbol,
    ConstructorSymbol,
    ExecutableSymbol,
    FormalParamSymbol,
);

// =============================================================================
// Member traits
// =============================================================================

/// A field, method or constructor declared in some class.
pub trait MemberSymbol: DynSymbol {
    fn simple_name(&self) -> &str;

    fn modifiers(&self) -> Modifiers;

    /// The class declaring this member.
    fn enclosing_class(&self) -> TypeSymbol;
}

pub trait FieldSymbol: MemberSymbol {
    fn is_enum_constant(&self) -> bool;
}

/// A method or constructor.
pub trait ExecutableSymbol: MemberSymbol {
    fn formal_parameters(&self) -> Vec<Box<dyn FormalParamSymbol>>;

    /// Number of formal parameters.
    fn arity(&self) -> usize;

    fn is_varargs(&self) -> bool;

    fn type_parameters(&self) -> Vec<TypeParamSymbol>;
}

pub trait MethodSymbol: ExecutableSymbol {}

pub trait ConstructorSymbol: ExecutableSymbol {}

/// A formal parameter of a method or constructor.
pub trait FormalParamSymbol: DynSymbol {
    fn simple_name(&self) -> &str;

    fn is_final(&self) -> bool;

    /// The method or constructor declaring this parameter.
    fn declaring_symbol(&self) -> Box<dyn ExecutableSymbol>;

    fn enclosing_class(&self) -> TypeSymbol {
        self.declaring_symbol().enclosing_class()
    }
}
