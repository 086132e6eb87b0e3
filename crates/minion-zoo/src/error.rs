//! Error types for the minion-zoo library.

use std::path::PathBuf;
use thiserror::Error;

use crate::label::{Label, SubjectId};

/// Main error type for minion-zoo operations.
#[derive(Debug, Error)]
pub enum MinionError {
    /// A confusion matrix element fell outside the interval [0, 1].
    #[error("Invalid confusion matrix: element {index} is {value}, all elements must be in the interval [0,1]")]
    InvalidConfusionMatrix { index: usize, value: f64 },

    /// `classify` was called on a minion that does not implement a labeling policy.
    #[error("Minion '{name}' does not implement classify")]
    Unimplemented { name: String },

    /// The minion's policy needs a gold label and none was supplied.
    #[error("Minion '{name}' requires a gold label to classify subject {subject_id}")]
    MissingGoldLabel { name: String, subject_id: SubjectId },

    /// A label outside the binary label space was given to a binary-only policy.
    #[error("Label {0} is not a binary label (expected 0 or 1)")]
    NonBinaryLabel(Label),

    /// A random minion or a configuration was given no labels to choose from.
    #[error("Label set is empty")]
    EmptyLabelSet,

    /// Two minions in one roster share a name.
    #[error("Duplicate minion name: {0}")]
    DuplicateName(String),

    /// A binary-only minion was configured for a task with more than two labels.
    #[error("Minion '{name}' only labels binary tasks but the label set contains {label}")]
    NonBinaryTask { name: String, label: Label },

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for minion-zoo operations.
pub type Result<T> = std::result::Result<T, MinionError>;
