//! presscode-core: punch/die SKU codec library.
//!
//! Translates a manufacturer's structured part-number code into the
//! canonical human-readable description, and verifies descriptions
//! against their SKU.
//!
//! # Public API
//!
//! Key types and entry points are re-exported at the crate root:
//!
//! - [`decode()`] -- SKU string to canonical description
//! - [`verify()`] -- re-render a SKU and compare against an expected string
//! - [`parse()`] -- SKU string to structured [`ToolDescriptor`]
//! - [`render()`] -- [`ToolDescriptor`] to canonical description
//! - [`Dimension`] -- exact fractional dimension with mixed-fraction display
//! - [`CodecError`] -- everything the codec can report

pub mod codec;
pub mod descriptor;
pub mod dimension;
pub mod error;
pub mod grammar;
pub mod render;

// ── Convenience re-exports ────────────────────────────────────────────

pub use codec::{decode, verify};
pub use descriptor::{Keyway, Shape, ToolDescriptor, ToolKind};
pub use dimension::{Dimension, MAX_DENOMINATOR, SKU_SUBUNIT_SCALE};
pub use error::CodecError;
pub use grammar::parse;
pub use render::render;
