//! Error types for the list widgets.

use tessera_core::IndexOutOfRange;
use thiserror::Error;

/// Errors surfaced by list, row and configuration operations.
///
/// Most list policies are silent no-ops (out-of-range selection, template
/// propagation); only operations whose caller must know about the rejection
/// return one of these.
#[derive(Debug, Error)]
pub enum ListError {
    /// A row data slot was written past the end of the row's data.
    #[error("data index {index} out of range for row with {len} values")]
    DataIndexOutOfRange {
        /// Requested slot
        index: usize,
        /// Number of values in the row
        len: usize,
    },

    /// A positional row or template mutation addressed a missing item.
    #[error("collection error: {0}")]
    Collection(#[from] IndexOutOfRange),

    /// Configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}
