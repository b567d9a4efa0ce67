//! Centralized limits for the symbol model.
//!
//! Limits that mirror a hard restriction of the JVM live here so that every
//! crate agrees on them.

// =============================================================================
// Array Limits
// =============================================================================

/// Maximum number of dimensions of an array type.
///
/// The class file format stores array dimensions in a single unsigned byte
/// (JVMS §4.3.2, §4.4.1), and `java.lang.reflect.Array.newInstance` rejects
/// requests for more. A runtime mirror can never exist beyond this depth,
/// and the symbol factory refuses to build such array symbols.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;
