//! SKU grammar: hyphen-delimited fields into a [`ToolDescriptor`].
//!
//! Layout: `KIND-SHAPE-WIDTH` for one-dimensional shapes,
//! `KIND-SHAPE-WIDTH-LENGTH` for two-dimensional ones. Dimension fields
//! are zero-padded integers in thousandths of an inch. The final
//! dimension field may carry a trailing keyway letter (`K` single,
//! `D` double) on punch codes only.
//!
//! Kind and shape tokens resolve against closed compile-time tables, and
//! they resolve before field-count validation so an unrecognized token
//! always reports as `UnknownShapeCode`, never `MalformedSku`.

use crate::descriptor::{Keyway, Shape, ToolDescriptor, ToolKind};
use crate::dimension::Dimension;
use crate::error::CodecError;

/// Closed kind-code table: first SKU field.
const KIND_CODES: &[(&str, ToolKind)] = &[("VPL", ToolKind::Punch), ("313", ToolKind::Die)];

/// Closed shape-code table: second SKU field.
const SHAPE_CODES: &[(&str, Shape)] = &[
    ("RND", Shape::Round),
    ("OBL", Shape::Oblong),
    ("RCT", Shape::Rectangle),
    ("HEX", Shape::Hex),
    ("SQR", Shape::Square),
];

fn kind_for(code: &str) -> Option<ToolKind> {
    KIND_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, k)| *k)
}

fn shape_for(code: &str) -> Option<Shape> {
    SHAPE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
}

fn malformed(sku: &str, reason: impl Into<String>) -> CodecError {
    CodecError::MalformedSku {
        sku: sku.to_owned(),
        reason: reason.into(),
    }
}

/// Parse a raw SKU string into a structured descriptor.
pub fn parse(sku: &str) -> Result<ToolDescriptor, CodecError> {
    let raw = sku.trim();
    if raw.is_empty() {
        return Err(malformed(sku, "empty SKU"));
    }

    let fields: Vec<&str> = raw.split('-').collect();
    if fields.len() < 2 {
        return Err(malformed(raw, "expected at least a kind code and a shape code"));
    }

    let kind = kind_for(fields[0]).ok_or_else(|| CodecError::UnknownShapeCode {
        code: fields[0].to_owned(),
    })?;
    let shape = shape_for(fields[1]).ok_or_else(|| CodecError::UnknownShapeCode {
        code: fields[1].to_owned(),
    })?;

    let expected = if shape.is_two_dimensional() { 4 } else { 3 };
    if fields.len() != expected {
        return Err(malformed(
            raw,
            format!(
                "{} {} codes take {} fields, found {}",
                shape.label(),
                kind.label(),
                expected,
                fields.len()
            ),
        ));
    }

    // The keyway letter rides on the final dimension field.
    let (last_field, keyway_code) = split_keyway_suffix(fields[expected - 1]);
    let keyway = match (kind, keyway_code) {
        (_, Some(other)) if keyway_for(other).is_none() => {
            return Err(malformed(raw, format!("unknown keyway code '{}'", other)));
        }
        (ToolKind::Die, Some(_)) => {
            return Err(CodecError::InvalidKeywayForDie {
                sku: raw.to_owned(),
            });
        }
        (ToolKind::Punch, Some(code)) => keyway_for(code),
        (ToolKind::Punch, None) => Some(Keyway::None),
        (ToolKind::Die, None) => None,
    };

    let width_field = if expected == 3 { last_field } else { fields[2] };
    let width = parse_dimension_field(raw, width_field)?;
    let length = if shape.is_two_dimensional() {
        Some(parse_dimension_field(raw, last_field)?)
    } else {
        None
    };

    Ok(ToolDescriptor {
        kind,
        shape,
        width,
        length,
        keyway,
        raw_sku: raw.to_owned(),
    })
}

fn keyway_for(code: char) -> Option<Keyway> {
    match code {
        'K' => Some(Keyway::Single),
        'D' => Some(Keyway::Double),
        _ => None,
    }
}

/// Split a trailing alphabetic keyway letter off a dimension field.
fn split_keyway_suffix(field: &str) -> (&str, Option<char>) {
    match field.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&field[..field.len() - 1], Some(c)),
        _ => (field, None),
    }
}

/// A dimension field is a non-empty all-digit string, non-zero, in
/// thousandths of an inch.
fn parse_dimension_field(sku: &str, field: &str) -> Result<Dimension, CodecError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(
            sku,
            format!("non-numeric dimension field '{}'", field),
        ));
    }
    let value: u64 = field
        .parse()
        .map_err(|_| malformed(sku, format!("dimension field '{}' out of range", field)))?;
    if value == 0 {
        return Err(malformed(sku, "zero dimension"));
    }
    Dimension::from_thousandths(value)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
