//! Labels, subjects and classification results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MinionError, Result};

/// A categorical label drawn from a task's label space.
pub type Label = u32;

/// Opaque identifier of the subject being classified.
pub type SubjectId = u64;

/// A member of the two-valued label space `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Label", into = "Label")]
pub enum BinaryLabel {
    Zero,
    One,
}

impl BinaryLabel {
    /// The other member of the binary label space.
    pub fn flipped(self) -> Self {
        match self {
            BinaryLabel::Zero => BinaryLabel::One,
            BinaryLabel::One => BinaryLabel::Zero,
        }
    }

    /// Position of this class in a per-class table such as a confusion matrix.
    pub fn index(self) -> usize {
        match self {
            BinaryLabel::Zero => 0,
            BinaryLabel::One => 1,
        }
    }
}

impl TryFrom<Label> for BinaryLabel {
    type Error = MinionError;

    fn try_from(label: Label) -> Result<Self> {
        match label {
            0 => Ok(BinaryLabel::Zero),
            1 => Ok(BinaryLabel::One),
            other => Err(MinionError::NonBinaryLabel(other)),
        }
    }
}

impl From<BinaryLabel> for Label {
    fn from(label: BinaryLabel) -> Self {
        label.index() as Label
    }
}

impl fmt::Display for BinaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Label::from(*self))
    }
}

/// The label a minion assigned to a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub subject_id: SubjectId,
    pub label: Label,
}

impl Classification {
    pub fn new(subject_id: SubjectId, label: impl Into<Label>) -> Self {
        Self {
            subject_id,
            label: label.into(),
        }
    }
}

impl From<Classification> for (SubjectId, Label) {
    fn from(c: Classification) -> Self {
        (c.subject_id, c.label)
    }
}

impl From<(SubjectId, Label)> for Classification {
    fn from((subject_id, label): (SubjectId, Label)) -> Self {
        Self { subject_id, label }
    }
}
