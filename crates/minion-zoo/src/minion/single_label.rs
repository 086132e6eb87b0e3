//! Constant-label minion.

use crate::error::Result;
use crate::label::{Classification, Label, SubjectId};

use super::{Classifier, MinionId, MinionIdentity};

/// A minion that classifies every subject with the same label,
/// regardless of the subject's gold label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllTheSingleLabelsMinion {
    identity: MinionIdentity,
    label: Label,
}

impl AllTheSingleLabelsMinion {
    pub fn new(id: MinionId, name: impl Into<String>, label: Label) -> Self {
        Self {
            identity: MinionIdentity::new(id, name),
            label,
        }
    }

    /// The label this minion gives to every subject.
    pub fn label(&self) -> Label {
        self.label
    }

    pub fn classify(&self, subject_id: SubjectId) -> Classification {
        Classification::new(subject_id, self.label)
    }
}

impl Classifier for AllTheSingleLabelsMinion {
    fn identity(&self) -> &MinionIdentity {
        &self.identity
    }

    fn policy(&self) -> &'static str {
        "single_label"
    }

    fn classify(
        &mut self,
        subject_id: SubjectId,
        _gold_label: Option<Label>,
    ) -> Result<Classification> {
        Ok(AllTheSingleLabelsMinion::classify(self, subject_id))
    }
}
