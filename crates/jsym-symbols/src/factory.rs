//! Symbol factory.
//!
//! The factory owns the symbols every array type refers to (`Object`,
//! `Cloneable`, `Serializable`) and interns array symbols by component, so
//! that asking twice for `int[]` hands out the same symbol.
//!
//! ## Sharing
//!
//! | Data | Scope |
//! |------|-------|
//! | `JavaLangSymbols` | process-wide default, or injected per factory |
//! | array intern table | per factory |

use crate::array::ArraySymbol;
use crate::class_stub::{ClassKind, ClassStub};
use crate::error::SymbolError;
use crate::primitive::PrimitiveSymbol;
use crate::symbol::TypeSymbol;
use dashmap::DashMap;
use jsym_common::limits::MAX_ARRAY_DIMENSIONS;
use jsym_common::{Modifiers, PrimitiveKind};
use once_cell::sync::Lazy;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tracing::{debug, trace};

/// Process-wide default set of shared supertypes.
static SHARED_JAVA_LANG: Lazy<Arc<JavaLangSymbols>> =
    Lazy::new(|| Arc::new(JavaLangSymbols::new()));

// =============================================================================
// JavaLangSymbols
// =============================================================================

/// The platform types that every array type reports as supertypes.
#[derive(Debug)]
pub struct JavaLangSymbols {
    object: TypeSymbol,
    cloneable: TypeSymbol,
    serializable: TypeSymbol,
    array_interfaces: Arc<[TypeSymbol]>,
}

impl JavaLangSymbols {
    /// Build a fresh set of platform symbols.
    ///
    /// Most callers want [`JavaLangSymbols::shared`] instead.
    pub fn new() -> Self {
        let object: TypeSymbol = ClassStub::builder("java.lang.Object")
            .modifiers(Modifiers::PUBLIC)
            .loadable()
            .build()
            .into();
        let cloneable: TypeSymbol = ClassStub::builder("java.lang.Cloneable")
            .kind(ClassKind::Interface)
            .modifiers(Modifiers::PUBLIC)
            .loadable()
            .build()
            .into();
        let serializable: TypeSymbol = ClassStub::builder("java.io.Serializable")
            .kind(ClassKind::Interface)
            .modifiers(Modifiers::PUBLIC)
            .loadable()
            .build()
            .into();
        let array_interfaces: Arc<[TypeSymbol]> =
            Arc::from([cloneable.clone(), serializable.clone()]);

        Self {
            object,
            cloneable,
            serializable,
            array_interfaces,
        }
    }

    /// The process-wide default instance.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED_JAVA_LANG)
    }

    pub fn object(&self) -> &TypeSymbol {
        &self.object
    }

    pub fn cloneable(&self) -> &TypeSymbol {
        &self.cloneable
    }

    pub fn serializable(&self) -> &TypeSymbol {
        &self.serializable
    }

    /// `[Cloneable, Serializable]`. Every call returns the same list.
    pub fn array_super_interfaces(&self) -> Arc<[TypeSymbol]> {
        Arc::clone(&self.array_interfaces)
    }
}

impl Default for JavaLangSymbols {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SymbolFactory
// =============================================================================

/// Creates and interns type symbols.
///
/// The factory is `Sync`; array symbols may be requested from any number of
/// threads at once.
#[derive(Debug)]
pub struct SymbolFactory {
    java_lang: Arc<JavaLangSymbols>,
    arrays: DashMap<TypeSymbol, ArraySymbol, FxBuildHasher>,
}

impl SymbolFactory {
    /// A factory using the process-wide platform symbols.
    pub fn new() -> Self {
        Self::with_java_lang(JavaLangSymbols::shared())
    }

    /// A factory using the given platform symbols.
    pub fn with_java_lang(java_lang: Arc<JavaLangSymbols>) -> Self {
        Self {
            java_lang,
            arrays: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn java_lang(&self) -> &Arc<JavaLangSymbols> {
        &self.java_lang
    }

    pub fn object(&self) -> &TypeSymbol {
        self.java_lang.object()
    }

    pub fn cloneable(&self) -> &TypeSymbol {
        self.java_lang.cloneable()
    }

    pub fn serializable(&self) -> &TypeSymbol {
        self.java_lang.serializable()
    }

    pub fn array_super_interfaces(&self) -> Arc<[TypeSymbol]> {
        self.java_lang.array_super_interfaces()
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> TypeSymbol {
        TypeSymbol::Primitive(PrimitiveSymbol::new(kind))
    }

    /// The symbol of `component[]`, interned by component.
    ///
    /// # Errors
    /// Fails if `component` is an anonymous class, or if the result would
    /// exceed the JVM's dimension limit.
    pub fn array_of(&self, component: &TypeSymbol) -> Result<TypeSymbol, SymbolError> {
        if let Some(hit) = self.arrays.get(component) {
            trace!(component = %component, "array symbol cache hit");
            return Ok(TypeSymbol::Array(hit.clone()));
        }

        let array = ArraySymbol::new(self, component.clone())?;
        // Another thread may have interned the same component meanwhile;
        // whichever entry landed first wins.
        let interned = self
            .arrays
            .entry(component.clone())
            .or_insert(array)
            .clone();
        debug!(array = %interned, dimensions = interned.dimensions(), "interned array symbol");
        Ok(TypeSymbol::Array(interned))
    }

    /// The symbol of `component` with `dims` array dimensions added.
    ///
    /// `dims == 0` returns `component` itself.
    pub fn array_of_dims(
        &self,
        component: &TypeSymbol,
        dims: usize,
    ) -> Result<TypeSymbol, SymbolError> {
        let base = component.as_array().map_or(0, ArraySymbol::dimensions);
        if base + dims > MAX_ARRAY_DIMENSIONS {
            return Err(SymbolError::TooManyDimensions {
                requested: base + dims,
                max: MAX_ARRAY_DIMENSIONS,
            });
        }

        let mut current = component.clone();
        for _ in 0..dims {
            current = self.array_of(&current)?;
        }
        Ok(current)
    }

    /// Number of array symbols interned so far.
    pub fn interned_array_count(&self) -> usize {
        self.arrays.len()
    }
}

impl Default for SymbolFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod tests;
