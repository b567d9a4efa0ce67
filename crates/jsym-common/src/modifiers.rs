//! Declaration modifiers.
//!
//! The bit values are exactly those of `java.lang.reflect.Modifier`, so a
//! modifier set computed for a source-only symbol can be compared bit-for-bit
//! with the `getModifiers()` value of a loaded class.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::fmt;

bitflags! {
    /// A set of JVM access and property flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Modifiers: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        // Reported by `Class.getModifiers()` but never printed by `Modifier.toString`
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
    }
}

/// Keyword order used by `Modifier.toString`.
const KEYWORD_ORDER: &[(Modifiers, &str)] = &[
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
    (Modifiers::INTERFACE, "interface"),
];

impl Modifiers {
    /// Create a modifier set from a raw `getModifiers()` value.
    ///
    /// Every bit is kept, including ones without a named constant.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// The raw `getModifiers()` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.bits()
    }

    /// Iterate over the keywords of this set in `Modifier.toString` order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        KEYWORD_ORDER
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, kw)| *kw)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for kw in self.keywords() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(kw)?;
            first = false;
        }
        Ok(())
    }
}

// Serialized as the raw `getModifiers()` value.
impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[cfg(test)]
#[path = "../tests/modifiers_tests.rs"]
mod tests;
