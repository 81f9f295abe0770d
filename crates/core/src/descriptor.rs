//! Structured tool descriptors produced by the SKU grammar parser.
//!
//! These types are the interchange surface between the parser, the
//! renderer, and the external loader/UI layer, so they all carry serde
//! derives.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

// ──────────────────────────────────────────────
// Tool kind
// ──────────────────────────────────────────────

/// The two supported tool kinds. Punches may carry a keyway; dies never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Punch,
    Die,
}

impl ToolKind {
    /// Lowercase name used in rendered descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Punch => "punch",
            ToolKind::Die => "die",
        }
    }
}

// ──────────────────────────────────────────────
// Shape
// ──────────────────────────────────────────────

/// Tool cross-section shapes. Closed set, driven by the shape-code table
/// in the grammar module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Round,
    Oblong,
    Rectangle,
    Hex,
    Square,
}

impl Shape {
    /// Capitalized name used in rendered descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Round => "Round",
            Shape::Oblong => "Oblong",
            Shape::Rectangle => "Rectangle",
            Shape::Hex => "Hex",
            Shape::Square => "Square",
        }
    }

    /// Whether the shape takes a separate length field (width x length).
    pub fn is_two_dimensional(&self) -> bool {
        matches!(self, Shape::Oblong | Shape::Rectangle)
    }
}

// ──────────────────────────────────────────────
// Keyway
// ──────────────────────────────────────────────

/// Keyway configuration on a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyway {
    None,
    Single,
    Double,
}

// ──────────────────────────────────────────────
// Descriptor
// ──────────────────────────────────────────────

/// Structured result of parsing a SKU.
///
/// Invariants, enforced by the parser: `length` is present iff the shape
/// is two-dimensional; `keyway` is present iff `kind` is `Punch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub kind: ToolKind,
    pub shape: Shape,
    pub width: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyway: Option<Keyway>,
    /// Original SKU string, kept for diagnostics.
    pub raw_sku: String,
}
