//! SKU codec: parse plus render, and re-render verification.

use crate::error::CodecError;
use crate::grammar;
use crate::render;

/// Decode a SKU into its canonical description.
///
/// Grammar and precision errors propagate unchanged.
pub fn decode(sku: &str) -> Result<String, CodecError> {
    Ok(render::render(&grammar::parse(sku)?))
}

/// Re-render a SKU and compare against an expected description by exact
/// string equality. For validation of the authoritative data set.
pub fn verify(sku: &str, expected_description: &str) -> Result<bool, CodecError> {
    Ok(decode(sku)? == expected_description)
}
