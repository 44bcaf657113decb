//! Errors
//!
//! Custom error types used throughout the `minitrees` crate.
use thiserror::Error;

/// Errors that can occur while loading a sample or growing a tree.
///
/// The first group of variants are caller contract violations
/// (an invalid target/attribute specification or a malformed input file).
/// [`MiniTreesError::EmptySample`] is the degenerate-input case:
/// a zero-row table has no row to take a leaf class from,
/// so induction refuses to start instead of returning a sentinel leaf.
#[derive(Debug, Error)]
pub enum MiniTreesError {
    /// The target column is not specified.
    #[error("The target column is not specified. Use `Sample::set_target`.")]
    TargetNotSet,
    /// The requested target column does not exist.
    #[error("The target column `{0}` does not exist in the sample.")]
    TargetNotFound(String),
    /// The requested attribute column does not exist.
    #[error("The attribute `{0}` does not exist in the sample.")]
    AttributeNotFound(String),
    /// The candidate attribute set contains the target column.
    #[error("The attribute set contains the target column `{0}`.")]
    TargetInAttributes(String),
    /// The candidate attribute set contains a name twice.
    #[error("The attribute `{0}` appears more than once in the attribute set.")]
    DuplicateAttribute(String),
    /// The sample has no rows.
    #[error("The sample has no rows, so a leaf has no class value to predict.")]
    EmptySample,
    /// A data row has the wrong number of fields.
    #[error("Row {row} has {found} fields, expected {expected}.")]
    RaggedRow {
        /// 0-indexed data row (the header does not count).
        row: usize,
        /// Number of fields the header declares.
        expected: usize,
        /// Number of fields found in the row.
        found: usize,
    },
    /// A cell holds no value.
    #[error("Column `{column}` has a missing value at row {row}.")]
    MissingValue {
        /// Column name.
        column: String,
        /// 0-indexed row.
        row: usize,
    },
    /// A column could not be converted to categorical values.
    #[error("Could not convert column `{0}` to categorical values.")]
    ColumnConversion(String),
    /// Drawing the tree failed.
    #[error("Failed to render the tree: {0}")]
    Render(String),
    /// Reading the input file failed.
    #[error("Failed to read the input file: {0}")]
    Io(#[from] std::io::Error),
}
