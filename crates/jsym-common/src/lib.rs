//! Common types and utilities for the jsym Java symbol model.
//!
//! This crate provides foundational types used across all jsym crates:
//! - Access and declaration modifiers (`Modifiers`)
//! - The JVM primitive and `void` kinds (`PrimitiveKind`)
//! - Centralized limits

// Modifier bits, bit-compatible with `java.lang.reflect.Modifier`
pub mod modifiers;
pub use modifiers::Modifiers;

// Primitive kinds and their JVM descriptors
pub mod primitive;
pub use primitive::PrimitiveKind;

// Centralized limits and thresholds
pub mod limits;
