//! Runtime class mirrors.
//!
//! A `JvmClass` is the value the host platform's `Class` object would have
//! for a type: an element class plus a number of array dimensions. Two
//! mirrors are equal exactly when the platform would hand out the same
//! `Class` instance, so `int[][]` derived twice compares equal.
//!
//! Naming follows the platform:
//!
//! | Type | `name()` | `type_name()` |
//! |------|----------|---------------|
//! | `int` | `int` | `int` |
//! | `int[][]` | `[[I` | `int[][]` |
//! | `String[]` | `[Ljava.lang.String;` | `java.lang.String[]` |

use jsym_common::PrimitiveKind;
use jsym_common::limits::MAX_ARRAY_DIMENSIONS;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The non-array part of a runtime class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JvmElement {
    Primitive(PrimitiveKind),
    /// A class or interface, by binary name.
    Named(Arc<str>),
}

/// A runtime class object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct JvmClass {
    element: JvmElement,
    dimensions: u8,
}

impl JvmClass {
    /// The class object of a primitive type or `void`.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self {
            element: JvmElement::Primitive(kind),
            dimensions: 0,
        }
    }

    /// The class object of a loaded class or interface.
    pub fn named(binary_name: &str) -> Self {
        Self {
            element: JvmElement::Named(binary_name.into()),
            dimensions: 0,
        }
    }

    /// The class of arrays with `dims` more dimensions than this class,
    /// as `Array.newInstance(this, new int[dims]).getClass()` would give.
    ///
    /// Returns `None` where the platform has no such class: arrays of
    /// `void`, zero added dimensions, or more than 255 dimensions in total.
    pub fn array_of(&self, dims: usize) -> Option<Self> {
        if dims == 0 {
            return None;
        }
        if matches!(self.element, JvmElement::Primitive(kind) if kind.is_void()) {
            debug!("void has no array class");
            return None;
        }
        let total = usize::from(self.dimensions) + dims;
        if total > MAX_ARRAY_DIMENSIONS {
            debug!(total, "array class exceeds the dimension limit");
            return None;
        }
        Some(Self {
            element: self.element.clone(),
            dimensions: u8::try_from(total).ok()?,
        })
    }

    pub fn element(&self) -> &JvmElement {
        &self.element
    }

    /// Number of array dimensions, 0 for non-array classes.
    pub fn dimensions(&self) -> usize {
        usize::from(self.dimensions)
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    pub fn is_primitive(&self) -> bool {
        self.dimensions == 0 && matches!(self.element, JvmElement::Primitive(_))
    }

    /// `getComponentType()`: the class with one dimension less.
    pub fn component_type(&self) -> Option<Self> {
        let dimensions = self.dimensions.checked_sub(1)?;
        Some(Self {
            element: self.element.clone(),
            dimensions,
        })
    }

    /// `getName()`: binary name for non-arrays, descriptor form for arrays.
    pub fn name(&self) -> String {
        if self.dimensions == 0 {
            return self.element_name().to_string();
        }
        let mut out = "[".repeat(self.dimensions());
        match &self.element {
            JvmElement::Primitive(kind) => out.push(kind.descriptor()),
            JvmElement::Named(name) => {
                out.push('L');
                out.push_str(name);
                out.push(';');
            }
        }
        out
    }

    /// `getTypeName()`: element name followed by one `[]` per dimension.
    pub fn type_name(&self) -> String {
        let mut out = self.element_name().to_string();
        for _ in 0..self.dimensions {
            out.push_str("[]");
        }
        out
    }

    fn element_name(&self) -> &str {
        match &self.element {
            JvmElement::Primitive(kind) => kind.name(),
            JvmElement::Named(name) => &**name,
        }
    }
}

impl fmt::Display for JvmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
#[path = "../tests/mirror_tests.rs"]
mod tests;
