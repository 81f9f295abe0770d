/// All errors the SKU codec can report.
///
/// Every variant is recoverable: callers report it and move on, nothing
/// here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The SKU does not match the field layout its kind and shape imply.
    #[error("malformed SKU '{sku}': {reason}")]
    MalformedSku { sku: String, reason: String },

    /// The kind or shape token is not in the closed code table.
    #[error("unknown shape code '{code}'")]
    UnknownShapeCode { code: String },

    /// A keyway suffix appeared on a die code. Dies never carry keyways.
    #[error("keyway code on die SKU '{sku}': dies have no keyways")]
    InvalidKeywayForDie { sku: String },

    /// The dimension is not representable at the supported fraction
    /// precision (power-of-two denominator dividing the maximum).
    #[error("unsupported precision: {value} is not representable in {max}ths")]
    UnsupportedPrecision { value: String, max: u64 },
}
