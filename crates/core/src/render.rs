//! Canonical description rendering.
//!
//! One template per shape arity; every numeral goes through the
//! [`Dimension`] display impl so fraction simplification has a single
//! source of truth.

use crate::descriptor::{Keyway, ToolDescriptor};

/// Render a descriptor into the canonical description string, e.g.
/// `"3/8 Round punch, no keyways"` or `"1/2 x 3/4 Oblong die"`.
pub fn render(descriptor: &ToolDescriptor) -> String {
    let size = match descriptor.length {
        Some(length) => format!("{} x {}", descriptor.width, length),
        None => descriptor.width.to_string(),
    };
    format!(
        "{} {} {}{}",
        size,
        descriptor.shape.label(),
        descriptor.kind.label(),
        keyway_clause(descriptor.keyway)
    )
}

/// The keyway clause. Only punches carry one; dies pass `None` and get
/// nothing.
fn keyway_clause(keyway: Option<Keyway>) -> &'static str {
    match keyway {
        Some(Keyway::None) => ", no keyways",
        Some(Keyway::Single) => ", single keyway",
        Some(Keyway::Double) => ", double keyway",
        None => "",
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
