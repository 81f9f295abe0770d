/// All errors the lookup layer can return.
///
/// A missing SKU is not an error: `resolve` reports it as a
/// [`Resolution::NotFound`](crate::Resolution::NotFound) value so batch
/// operations stay total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The loader supplied no rows at all.
    #[error("cannot build an index from an empty dataset")]
    EmptyDataset,

    /// A query arrived before any table was loaded.
    #[error("no SKU table loaded")]
    IndexNotReady,
}
