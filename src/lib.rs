//! # jsym
//!
//! Type-declaration symbols for Java static analysis, with first-class array
//! types that never need the host runtime.
//!
//! ```
//! use jsym::{ClassSymbol, PrimitiveKind, SymbolFactory, TypeDeclSymbol};
//!
//! let factory = SymbolFactory::new();
//! let int = factory.primitive(PrimitiveKind::Int);
//! let matrix = factory.array_of_dims(&int, 2).unwrap();
//!
//! let class = matrix.as_class().unwrap();
//! assert_eq!(class.binary_name(), "int[][]");
//! assert_eq!(matrix.jvm_repr().unwrap().name(), "[[I");
//! ```
//!
//! The crates behind the facade:
//! - `jsym-common`: modifiers, primitive kinds, limits
//! - `jsym-symbols`: symbols, the array symbol and its members, the factory

pub mod tracing_config;

pub use jsym_common::limits;
pub use jsym_common::{Modifiers, PrimitiveKind};
pub use jsym_symbols::*;
