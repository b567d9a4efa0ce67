//! Type-Declaration Symbols
//!
//! This crate models the types a Java static analyzer reasons about as
//! symbols, without loading anything into a host runtime. Its centerpiece is
//! the array symbol: given any component symbol it synthesizes `T[]`, with
//! names, modifiers, supertypes, members and runtime mirror identical to what
//! reflection reports for the loaded array class.
//!
//! - **`TypeSymbol`**: closed set of symbol variants (primitive, class, array)
//! - **`ClassSymbol`**: class-level queries shared by classes and arrays
//! - **`ArraySymbol`**: array types, with synthetic `length`, `clone()` and
//!   constructor members
//! - **`SymbolFactory`**: shared platform supertypes and array interning
//! - **`JvmClass`**: value model of runtime class objects
mod array;
mod array_members;
mod class_stub;
mod error;
mod factory;
pub mod members;
mod mirror;
mod primitive;
mod symbol;

pub use array::ArraySymbol;
pub use array_members::{ArrayCloneMethod, ArrayConstructor, ArrayConstructorParam, ArrayLengthField};
pub use class_stub::{ClassKind, ClassStub, ClassStubBuilder, Nesting};
pub use error::SymbolError;
pub use factory::{JavaLangSymbols, SymbolFactory};
pub use members::{
    ConstructorSymbol, DynSymbol, ExecutableSymbol, FieldSymbol, FormalParamSymbol, MemberSymbol,
    MethodSymbol,
};
pub use mirror::{JvmClass, JvmElement};
pub use primitive::PrimitiveSymbol;
pub use symbol::{ClassRef, ClassSymbol, TypeDeclSymbol, TypeParamSymbol, TypeSymbol};
